//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_roster_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum RosterError {
            $($variant(String),)*
        }

        impl RosterError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RosterError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RosterError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RosterError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RosterError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RosterError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_roster_errors! {
    ConfigLoad("E001", "Configuration Error"),
    StoreUnavailable("E002", "Store Unavailable"),
    CorruptStore("E003", "Corrupt Store"),
    DatabaseOperation("E004", "Database Operation Error"),
    ReferentialIntegrity("E005", "Referential Integrity Error"),
    UniquenessViolation("E006", "Uniqueness Violation"),
    InvalidPinyinFormat("E007", "Invalid Pinyin Format"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
}

impl RosterError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 将数据库错误归类，约束冲突映射为对应的完整性错误
    ///
    /// `context` 描述失败的操作，会拼接在错误详情前面。
    pub fn from_db_err(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                return RosterError::referential_integrity(format!("{context}: {msg}"));
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                return RosterError::uniqueness_violation(format!("{context}: {msg}"));
            }
            _ => {}
        }

        // SQLite 驱动未带错误码时按消息兜底
        let msg = err.to_string();
        if msg.contains("FOREIGN KEY constraint failed") {
            RosterError::referential_integrity(format!("{context}: {msg}"))
        } else if msg.contains("UNIQUE constraint failed") {
            RosterError::uniqueness_violation(format!("{context}: {msg}"))
        } else {
            RosterError::database_operation(format!("{context}: {msg}"))
        }
    }
}

impl fmt::Display for RosterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RosterError {}

// 为常见的错误类型实现 From trait
impl From<DbErr> for RosterError {
    fn from(err: DbErr) -> Self {
        RosterError::from_db_err("database error", err)
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::StoreUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for RosterError {
    fn from(err: config::ConfigError) -> Self {
        RosterError::ConfigLoad(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

/// 判断 SQLite 错误是否表示文件损坏或不是数据库
///
/// 覆盖 SQLITE_CORRUPT (11) 与 SQLITE_NOTADB (26)，驱动未带错误码时按消息判断。
pub fn is_corrupt_store(code: Option<&str>, msg: &str) -> bool {
    matches!(code, Some("11" | "26"))
        || msg.contains("not a database")
        || msg.contains("database disk image is malformed")
}
