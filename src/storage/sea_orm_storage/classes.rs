//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::entity::grades::Entity as Grades;
use crate::errors::{Result, RosterError};
use crate::models::{
    classes::{
        entities::Class,
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    grades::entities::Grade,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班级，年级不存在时由外键约束拒绝
    pub async fn create_class_impl(&self, req: CreateClassRequest) -> Result<Class> {
        let model = ActiveModel {
            id: Set(req.id),
            grade_id: Set(req.grade_id),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("创建班级失败", e))?;

        Ok(result.into_class())
    }

    /// 通过 ID 获取班级
    pub async fn get_class_by_id_impl(&self, id: &str) -> Result<Option<Class>> {
        let result = Classes::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级失败", e))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 列出年级下的班级
    pub async fn list_classes_by_grade_impl(&self, grade_id: &str) -> Result<Vec<Class>> {
        let classes = Classes::find()
            .filter(Column::GradeId.eq(grade_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级列表失败", e))?;

        Ok(classes.into_iter().map(|m| m.into_class()).collect())
    }

    /// 获取班级所属年级
    pub async fn get_class_grade_impl(&self, class_id: &str) -> Result<Option<Grade>> {
        let Some(class) = Classes::find_by_id(class_id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级失败", e))?
        else {
            return Ok(None);
        };

        let grade = class
            .find_related(Grades)
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级所属年级失败", e))?;

        Ok(grade.map(|m| m.into_grade()))
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        id: &str,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        // 先检查班级是否存在
        let Some(existing) = Classes::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询班级失败", e))?
        else {
            return Ok(None);
        };

        let Some(grade_id) = update.grade_id else {
            return Ok(Some(existing.into_class()));
        };

        let mut model: ActiveModel = existing.into();
        model.grade_id = Set(grade_id);

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("更新班级失败", e))?;

        Ok(Some(updated.into_class()))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, id: &str) -> Result<bool> {
        let result = Classes::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("删除班级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
