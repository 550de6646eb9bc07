//! SeaORM 存储实现
//!
//! 基于本地 SQLite 文件的存储层。

mod classes;
mod grades;
mod roster;
mod students;

#[cfg(test)]
mod tests;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, RosterError, is_corrupt_store};
use crate::storage::schema;
use sea_orm::DatabaseConnection;
use sea_orm::sqlx;
use std::path::Path;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let path = config.database_path().map_err(|e| {
            RosterError::store_unavailable(format!("无法解析数据库路径: {e}"))
        })?;

        Self::open(&path, &config.database).await
    }

    /// 打开（必要时创建）数据库文件并确保表结构存在
    ///
    /// 对同一路径重复调用是安全的，已有的表和数据不会被修改。
    pub async fn open(path: &Path, config: &DatabaseConfig) -> Result<Self> {
        Self::check_parent_dir(path)?;

        let db = Self::connect_sqlite(path, config).await?;
        info!("Using database at \"{}\"", path.display());

        schema::apply_schema(&db).await?;
        debug!("Tables created (if missing)");

        Ok(Self { db })
    }

    /// 父目录必须已存在，这里不会自动创建
    fn check_parent_dir(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
                Err(RosterError::store_unavailable(format!(
                    "数据库目录不存在: {}",
                    parent.display()
                )))
            }
            _ => Ok(()),
        }
    }

    /// SQLite 专用连接（WAL + 外键约束）
    async fn connect_sqlite(path: &Path, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::ConnectOptions as _;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };

        let opt = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(config.timeout));

        // 仅在 DEBUG 及更详细的日志级别下回显 SQL
        let opt = if statement_echo_enabled(LevelFilter::current()) {
            opt.log_statements(tracing::log::LevelFilter::Debug)
        } else {
            opt.disable_statement_logging()
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| Self::classify_open_error(path, e))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 区分“文件损坏或不是 SQLite 数据库”和其他打开失败
    fn classify_open_error(path: &Path, err: sqlx::Error) -> RosterError {
        let code = match &err {
            sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
            _ => None,
        };

        if is_corrupt_store(code.as_deref(), &err.to_string()) {
            RosterError::corrupt_store(format!(
                "{} 不是有效的 SQLite 数据库: {err}",
                path.display()
            ))
        } else {
            RosterError::store_unavailable(format!(
                "无法打开数据库 {}: {err}",
                path.display()
            ))
        }
    }
}

/// 日志级别为 DEBUG 或更详细时回显 SQL
fn statement_echo_enabled(level: LevelFilter) -> bool {
    level >= LevelFilter::DEBUG
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 年级模块
    async fn create_grade(&self, id: &str) -> Result<Grade> {
        self.create_grade_impl(id).await
    }

    async fn get_grade_by_id(&self, id: &str) -> Result<Option<Grade>> {
        self.get_grade_by_id_impl(id).await
    }

    async fn list_grades(&self) -> Result<Vec<Grade>> {
        self.list_grades_impl().await
    }

    async fn delete_grade(&self, id: &str) -> Result<bool> {
        self.delete_grade_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: &str) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn list_classes_by_grade(&self, grade_id: &str) -> Result<Vec<Class>> {
        self.list_classes_by_grade_impl(grade_id).await
    }

    async fn get_class_grade(&self, class_id: &str) -> Result<Option<Grade>> {
        self.get_class_grade_impl(class_id).await
    }

    async fn update_class(&self, id: &str, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn delete_class(&self, id: &str) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_by_class(&self, class_id: &str) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn list_students_by_grade(&self, grade_id: &str) -> Result<Vec<Student>> {
        self.list_students_by_grade_impl(grade_id).await
    }

    async fn get_student_class(&self, student_id: &str) -> Result<Option<Class>> {
        self.get_student_class_impl(student_id).await
    }

    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: &str) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 花名册模块
    async fn get_grade_roster(&self, grade_id: &str) -> Result<Option<GradeRoster>> {
        self.get_grade_roster_impl(grade_id).await
    }

    async fn list_grade_mismatched_students(&self) -> Result<Vec<Student>> {
        self.list_grade_mismatched_students_impl().await
    }
}
