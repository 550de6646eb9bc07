use std::sync::Arc;

use crate::models::{
    GradeRoster,
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    grades::entities::Grade,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};

use crate::errors::Result;

pub mod schema;
pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 年级管理方法
    // 创建年级
    async fn create_grade(&self, id: &str) -> Result<Grade>;
    // 通过ID获取年级
    async fn get_grade_by_id(&self, id: &str) -> Result<Option<Grade>>;
    // 列出全部年级（按 id 升序）
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    // 删除年级，仍有班级或学生引用时失败
    async fn delete_grade(&self, id: &str) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级
    async fn get_class_by_id(&self, id: &str) -> Result<Option<Class>>;
    // 列出年级下的班级（按 id 升序）
    async fn list_classes_by_grade(&self, grade_id: &str) -> Result<Vec<Class>>;
    // 获取班级所属年级
    async fn get_class_grade(&self, class_id: &str) -> Result<Option<Grade>>;
    // 更新班级信息
    async fn update_class(&self, id: &str, update: UpdateClassRequest) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, id: &str) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    // 列出班级学生（按 id 升序）
    async fn list_students_by_class(&self, class_id: &str) -> Result<Vec<Student>>;
    // 列出年级学生（按学生自身的 grade_id，id 升序）
    async fn list_students_by_grade(&self, grade_id: &str) -> Result<Vec<Student>>;
    // 获取学生所在班级
    async fn get_student_class(&self, student_id: &str) -> Result<Option<Class>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: &str) -> Result<bool>;

    /// 花名册视图
    // 获取年级花名册
    async fn get_grade_roster(&self, grade_id: &str) -> Result<Option<GradeRoster>>;
    // 列出 grade_id 与所在班级年级不一致的学生
    async fn list_grade_mismatched_students(&self) -> Result<Vec<Student>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
