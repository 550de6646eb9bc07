//! 表结构定义
//!
//! 三张表按依赖顺序排列（被引用的表在前），由初始化流程逐一执行
//! `CREATE TABLE IF NOT EXISTS`，从不删除或修改已有表。

use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{ConnectionTrait, DatabaseConnection, Schema};
use tracing::debug;

use crate::entity::prelude::{Classes, Grades, Students};
use crate::errors::{Result, RosterError, is_corrupt_store};

/// 单张表的建表描述
pub struct TableSchema {
    pub name: &'static str,
    pub create: fn(&Schema) -> TableCreateStatement,
}

pub const ROSTER_SCHEMA: &[TableSchema] = &[
    TableSchema {
        name: "grades",
        create: create_grades,
    },
    TableSchema {
        name: "classes",
        create: create_classes,
    },
    TableSchema {
        name: "students",
        create: create_students,
    },
];

fn create_grades(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(Grades)
}

fn create_classes(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(Classes)
}

fn create_students(schema: &Schema) -> TableCreateStatement {
    schema.create_table_from_entity(Students)
}

/// 确保所有表存在，可重复调用
pub async fn apply_schema(db: &DatabaseConnection) -> Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    for table in ROSTER_SCHEMA {
        let mut stmt = (table.create)(&schema);
        stmt.if_not_exists();

        let sql = backend.build(&stmt).sql;
        db.execute_unprepared(&sql).await.map_err(|e| {
            let msg = e.to_string();
            if is_corrupt_store(None, &msg) {
                RosterError::corrupt_store(format!("创建表 {} 失败: {msg}", table.name))
            } else {
                RosterError::database_operation(format!("创建表 {} 失败: {msg}", table.name))
            }
        })?;

        debug!("Table `{}` verified", table.name);
    }

    Ok(())
}
