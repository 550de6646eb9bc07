//! 花名册视图

use super::SeaOrmStorage;
use crate::entity::classes::Entity as Classes;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, RosterError};
use crate::models::{ClassRoster, GradeRoster, students::entities::Student};
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 组装年级花名册，班级和学生均按 id 升序
    pub async fn get_grade_roster_impl(&self, grade_id: &str) -> Result<Option<GradeRoster>> {
        let Some(grade) = self.get_grade_by_id_impl(grade_id).await? else {
            return Ok(None);
        };

        let classes = self.list_classes_by_grade_impl(grade_id).await?;
        let mut rosters = Vec::with_capacity(classes.len());
        for class in classes {
            let students = self.list_students_by_class_impl(&class.id).await?;
            rosters.push(ClassRoster { class, students });
        }

        Ok(Some(GradeRoster {
            grade,
            classes: rosters,
        }))
    }

    /// 找出自身 grade_id 与所在班级年级不一致的学生
    pub async fn list_grade_mismatched_students_impl(&self) -> Result<Vec<Student>> {
        let rows = Students::find()
            .find_also_related(Classes)
            .order_by_asc(StudentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RosterError::from_db_err("查询学生班级信息失败", e))?;

        Ok(rows
            .into_iter()
            .filter(|(student, class)| {
                class
                    .as_ref()
                    .is_some_and(|class| class.grade_id != student.grade_id)
            })
            .map(|(student, _)| student.into_student())
            .collect())
    }
}
