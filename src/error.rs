use thiserror::Error;

/// Failure to obtain a price series from a provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {0}")]
    Status(u16),

    #[error("Provider error: {code} - {description}")]
    Api { code: String, description: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No data for {0}")]
    NoData(String),
}

impl ProviderError {
    /// Whether retrying the same request may succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ProviderError::Http(e) => !e.is_decode() && !e.is_builder(),
            ProviderError::Status(code) => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

/// Failure to persist cycle results.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: String, value: String },

    #[error("Invalid cron expression: {0}")]
    Cron(String),
}
