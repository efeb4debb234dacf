use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, error, warn};

use judging_engine::config::AppConfig;
use judging_engine::runtime::{lifetime, logging};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();

    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return std::process::ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志
    let _guard = logging::init_tracing(config);

    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let engine = match lifetime::startup::prepare_engine_startup(config).await {
        Ok(engine) => engine,
        Err(e) => {
            error!("Engine startup failed: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    warn!(
        "{} is ready, roles available: {}",
        config.app.system_name,
        engine.roles.role_names().join(", ")
    );

    std::process::ExitCode::SUCCESS
}
