//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, RosterError};
use crate::models::grades::entities::Grade;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_grade_impl(&self, id: &str) -> Result<Grade> {
        let model = ActiveModel {
            id: Set(id.to_string()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("创建年级失败", e))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取年级
    pub async fn get_grade_by_id_impl(&self, id: &str) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询年级失败", e))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出全部年级
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询年级列表失败", e))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 删除年级
    pub async fn delete_grade_impl(&self, id: &str) -> Result<bool> {
        let result = Grades::delete_by_id(id.to_string())
            .exec(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("删除年级失败", e))?;

        Ok(result.rows_affected > 0)
    }
}
