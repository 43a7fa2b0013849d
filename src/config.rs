use std::path::PathBuf;

use crate::deck::render::DEFAULT_THEME;
use crate::errors::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8509;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_MAX_PAYLOAD: usize = 4 * 1024 * 1024;

/// Server settings, read from `SLIDES_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Markdown file to present at startup instead of the demo deck.
    pub deck_file: Option<PathBuf>,
    pub max_payload: usize,
    pub code_theme: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            deck_file: None,
            max_payload: DEFAULT_MAX_PAYLOAD,
            code_theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Read from the process environment (after `.env` has been applied).
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();

        if let Some(host) = get("SLIDES_HOST") {
            cfg.host = host;
        }
        if let Some(port) = get("SLIDES_PORT") {
            cfg.port = port
                .parse()
                .map_err(|_| AppError::Config(format!("SLIDES_PORT is not a valid port: {port}")))?;
        }
        if let Some(dir) = get("SLIDES_STATIC_DIR") {
            cfg.static_dir = PathBuf::from(dir);
        }
        cfg.deck_file = get("SLIDES_DECK_FILE").map(PathBuf::from);
        if let Some(limit) = get("SLIDES_MAX_PAYLOAD") {
            cfg.max_payload = limit.parse().map_err(|_| {
                AppError::Config(format!("SLIDES_MAX_PAYLOAD is not a byte count: {limit}"))
            })?;
        }
        if let Some(theme) = get("SLIDES_CODE_THEME") {
            cfg.code_theme = theme;
        }
        Ok(cfg)
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
