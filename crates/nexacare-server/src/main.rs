use std::sync::Arc;

use aws_config::BehaviorVersion;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use nexacare_bedrock::engine::BedrockAnalysisEngine;
use nexacare_export::pdf::{ChromiumLauncher, PageSetup};
use nexacare_export::styles::DocumentStyles;
use nexacare_server::cache::ReportCache;
use nexacare_server::config::ServerConfig;
use nexacare_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let engine = BedrockAnalysisEngine::new(&aws_config, config.model_id.clone());
    let launcher = ChromiumLauncher::new(config.browser_path.clone());

    let state = AppState {
        engine: Arc::new(engine),
        launcher: Arc::new(launcher),
        styles: DocumentStyles::default(),
        page_setup: PageSetup::default(),
        reports: ReportCache::new(config.report_ttl),
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, model = %config.model_id, "listening");
    axum::serve(listener, nexacare_server::router(state)).await?;
    Ok(())
}
