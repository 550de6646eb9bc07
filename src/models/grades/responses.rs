use serde::Serialize;

use super::entities::Grade;
use crate::models::{classes::entities::Class, students::entities::Student};

// 年级花名册：年级 -> 班级（按 id 升序）-> 学生（按 id 升序）
#[derive(Debug, Clone, Serialize)]
pub struct GradeRoster {
    pub grade: Grade,
    pub classes: Vec<ClassRoster>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassRoster {
    pub class: Class,
    pub students: Vec<Student>,
}
