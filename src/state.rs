use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::error::GatewayError;
use crate::observability::metrics::Metrics;

pub struct GatewayState {
    pub upstream_url: String,
    pub static_dir: PathBuf,
    pub http: reqwest::Client,
    pub metrics: Metrics,
}

impl GatewayState {
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|err| GatewayError::Internal(format!("http client build failed: {err}")))?;

        Ok(Self {
            upstream_url: config.upstream_url.trim_end_matches('/').to_string(),
            static_dir: config.static_dir.clone(),
            http,
            metrics: Metrics::new(),
        })
    }
}
