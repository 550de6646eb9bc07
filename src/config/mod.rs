//! 配置管理
//!
//! 默认值 -> 配置文件 -> 环境变量，逐层覆盖。

#[path = "impl.rs"]
mod config_impl;
mod structs;

pub use config_impl::resolve_database_path;
pub use structs::{AppConfig, AppSettings, DatabaseConfig};
