use dotenv::dotenv;
use human_panic::setup_panic;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, error, warn};

// 从 lib.rs 导入模块
use studentdb_roster::config::AppConfig;
use studentdb_roster::errors::{Result, RosterError};
use studentdb_roster::runtime::lifetime;
use studentdb_roster::storage::Storage;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("{}", RosterError::from(e));
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting roster store...
        Project: {}
        Version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    // 初始化失败直接中止
    let startup = match lifetime::startup::prepare_startup().await {
        Ok(startup) => startup,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time)
            .num_milliseconds()
    );

    let grade_id = std::env::args().nth(1);
    match print_rosters(&startup.storage, grade_id.as_deref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// 以 JSON 输出花名册；指定年级时只输出该年级
async fn print_rosters(storage: &Arc<dyn Storage>, grade_id: Option<&str>) -> Result<()> {
    let grade_ids = match grade_id {
        Some(id) => vec![id.to_string()],
        None => storage
            .list_grades()
            .await?
            .into_iter()
            .map(|g| g.id)
            .collect(),
    };

    let mut rosters = Vec::with_capacity(grade_ids.len());
    for id in &grade_ids {
        let roster = storage
            .get_grade_roster(id)
            .await?
            .ok_or_else(|| RosterError::not_found(format!("年级不存在: {id}")))?;
        rosters.push(roster);
    }

    println!("{}", serde_json::to_string_pretty(&rosters)?);
    Ok(())
}
