use std::sync::Arc;

use bourse_api::middleware::auth::JwtClientAuthenticator;
use bourse_api::server::{AppState, Providers, start_server};
use bourse_core::config::{AppConfig, LogConfig};
use bourse_upstream::RemoteBackend;
use config::{Config, ConfigError, Environment, File};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const CONFIG_FILE: &str = "config/bourse";
const ENV_PREFIX: &str = "BOURSE";
const LOG_FILE_PREFIX: &str = "bourse.log";

/// # Summary
/// 应用启动入口，纯粹的 DI 容器。
/// 负责实例化远程后端与 Token 校验器，并通过 Arc<dyn Trait> 注入到控制器层。
///
/// # Logic
/// 1. 加载配置 (文件 + 环境变量)。
/// 2. 初始化全局日志，文件日志的 guard 必须存活到进程退出。
/// 3. 实例化基础设施层 (RemoteBackend、JwtClientAuthenticator)。
/// 4. 组装 AppState 并启动 HTTP 服务，等待 Ctrl-C 优雅退出。
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载配置
    let config = load_config(CONFIG_FILE)?;

    // 2. 初始化日志
    let _guard = init_tracing(&config.log);
    info!("Bourse controller starting...");

    // 3. 实例化基础设施层
    let backend = Arc::new(RemoteBackend::new(&config.upstream)?);
    info!(upstream = backend.base_url(), "remote backend ready");
    let authenticator = Arc::new(JwtClientAuthenticator::new(&config.auth.jwt_secret));

    // 4. 组装并启动
    let state = AppState::new(Providers::from_backend(backend), authenticator);
    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    start_server(state, &bind_addr, shutdown_signal()).await?;

    info!("Shutdown complete. Exiting...");
    Ok(())
}

/// # Summary
/// 读取配置: 可选的配置文件之上叠加 `BOURSE__SECTION__KEY` 形式的环境变量。
///
/// # Arguments
/// * `path` - 不带扩展名的配置文件路径，文件不存在时全部使用缺省值。
fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}

/// # Summary
/// 初始化 tracing。`RUST_LOG` 优先于配置中的级别。
///
/// # Logic
/// 1. 标准输出始终开启。
/// 2. 配置了 `log.dir` 时额外挂载按天滚动的非阻塞文件输出，返回其 guard。
fn init_tracing(log: &LogConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));

    let (file_layer, guard) = match &log.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();
    guard
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received. Draining connections...");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = load_config("config/does-not-exist").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.timeout_ms, 5_000);
    }
}
