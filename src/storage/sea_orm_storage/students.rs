//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::classes::Entity as Classes;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, RosterError};
use crate::models::{
    classes::entities::Class,
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学生，年级或班级不存在时由外键约束拒绝
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            id: Set(req.id),
            grade_id: Set(req.grade_id),
            class_id: Set(req.class_id),
            name: Set(req.name),
            pinyin: Set(req.pinyin),
            gender: Set(req.gender),
            birthday: Set(req.birthday),
            eduid: Set(req.eduid),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("创建学生失败", e))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: &str) -> Result<Option<Student>> {
        let result = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询学生失败", e))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出班级学生
    pub async fn list_students_by_class_impl(&self, class_id: &str) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级学生失败", e))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出年级学生
    pub async fn list_students_by_grade_impl(&self, grade_id: &str) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::GradeId.eq(grade_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询年级学生失败", e))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 获取学生所在班级
    pub async fn get_student_class_impl(&self, student_id: &str) -> Result<Option<Class>> {
        let Some(student) = Students::find_by_id(student_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询学生失败", e))?
        else {
            return Ok(None);
        };

        let class = student
            .find_related(Classes)
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询学生所在班级失败", e))?;

        Ok(class.map(|m| m.into_class()))
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let Some(existing) = Students::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询学生失败", e))?
        else {
            return Ok(None);
        };

        if update.is_empty() {
            return Ok(Some(existing.into_student()));
        }

        let mut model: ActiveModel = existing.into();

        if let Some(grade_id) = update.grade_id {
            model.grade_id = Set(grade_id);
        }

        if let Some(class_id) = update.class_id {
            model.class_id = Set(class_id);
        }

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(pinyin) = update.pinyin {
            model.pinyin = Set(pinyin);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender);
        }

        if let Some(birthday) = update.birthday {
            model.birthday = Set(birthday);
        }

        if let Some(eduid) = update.eduid {
            model.eduid = Set(eduid);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("更新学生失败", e))?;

        Ok(Some(updated.into_student()))
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, id: &str) -> Result<bool> {
        let result = Students::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("删除学生失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
