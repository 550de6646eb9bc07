use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // 内置默认值，保证无配置文件时也能启动
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("app.root", "")?
            .set_default("database.path", "database/database.sqlite")?
            .set_default("database.pool_size", 1)?
            .set_default("database.timeout", 5)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("ROSTER")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("app.root", std::env::var("ROSTER_ROOT").ok())?
            .set_override_option("database.path", std::env::var("DATABASE_PATH").ok())?;

        builder.build()?.try_deserialize()
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取数据库文件的完整路径
    pub fn database_path(&self) -> std::io::Result<PathBuf> {
        let root = if self.app.root.is_empty() {
            std::env::current_dir()?
        } else {
            PathBuf::from(&self.app.root)
        };
        Ok(resolve_database_path(&root, &self.database.path))
    }
}

/// 相对路径基于根目录解析，绝对路径原样返回
pub fn resolve_database_path(root: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
