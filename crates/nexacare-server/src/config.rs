use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Inference profile used for analysis and chat unless overridden.
pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REPORT_TTL_SECS: u64 = 1800;

/// Runtime settings, read from the environment once at startup and passed
/// down. Route handlers never consult the environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub model_id: String,
    pub browser_path: Option<PathBuf>,
    pub report_ttl: Duration,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        let bind_addr = env::var("NEXACARE_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()?;
        let model_id =
            env::var("NEXACARE_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
        let browser_path = env::var("NEXACARE_CHROMIUM_PATH").ok().map(PathBuf::from);
        let report_ttl = env::var("NEXACARE_REPORT_TTL_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_REPORT_TTL_SECS));

        Ok(Self {
            bind_addr,
            model_id,
            browser_path,
            report_ttl,
        })
    }
}
