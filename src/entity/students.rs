//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub grade_id: String,
    pub class_id: String,
    pub name: String,
    // 以 `/` 分隔的多种拼音写法，派生属性见 utils::pinyin
    pub pinyin: String,
    pub gender: String,
    #[sea_orm(column_type = "String(StringLen::N(10))", nullable)]
    pub birthday: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(8))", nullable)]
    pub eduid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grades::Entity",
        from = "Column::GradeId",
        to = "super::grades::Column::Id"
    )]
    Grade,
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        crate::models::students::entities::Student {
            id: self.id,
            grade_id: self.grade_id,
            class_id: self.class_id,
            name: self.name,
            pinyin: self.pinyin,
            gender: self.gender,
            birthday: self.birthday,
            eduid: self.eduid,
        }
    }
}
