//! StudentDB Roster - 年级 / 班级 / 学生花名册存储
//!
//! 基于 SeaORM + SQLite 的数据模型层，供命令处理等上层组件直接读写。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `runtime`: 运行时生命周期管理
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数（拼音派生属性）

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod utils;
