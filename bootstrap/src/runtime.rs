//! 服务运行时

use oms_config::AppConfig;
use oms_telemetry::{init_tracing, init_tracing_json};
use tracing::info;

/// 初始化服务运行时
pub fn init_runtime(config: &AppConfig) {
    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Runtime initialized"
    );
}
