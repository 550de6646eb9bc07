//! 业务数据模型
//!
//! 与 `entity` 中的数据库实体分离，存储层查询后转换为这里的结构体返回给调用方。

pub mod classes;
pub mod grades;
pub mod students;

pub use grades::responses::{ClassRoster, GradeRoster};
