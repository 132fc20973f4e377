//! Kotone - VITS 语音合成 Web 客户端
//!
//! 托管合成表单页面，并将页面的合成请求转发给外部 TTS 服务:
//! - Domain: synthesis/ (请求变体与校验)
//! - Application: ports (TtsBackend)
//! - Infrastructure: http, adapters

use std::sync::Arc;

use kotone::config::{load_config, print_config};
use kotone::infrastructure::adapters::{HttpTtsClient, HttpTtsClientConfig};
// use kotone::infrastructure::adapters::FakeTtsClient;
use kotone::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},kotone={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Kotone - VITS 语音合成 Web 客户端");
    print_config(&config);

    // 创建 HTTP TTS 客户端
    let tts_config = HttpTtsClientConfig {
        base_url: config.tts.url.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let tts_backend = Arc::new(HttpTtsClient::new(tts_config)?);

    // // 使用 Fake TTS 客户端（本地开发，不访问合成服务）
    // let tts_backend = Arc::new(FakeTtsClient::with_defaults());

    // 创建 HTTP 服务器
    let static_dir = config
        .server
        .static_files
        .enabled
        .then(|| config.server.static_files.dir.clone());
    let server_config =
        ServerConfig::new(&config.server.host, config.server.port).with_static_dir(static_dir);
    let state = AppState::new(tts_backend);

    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
