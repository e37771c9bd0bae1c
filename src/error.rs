use thiserror::Error;

/// Errors produced while turning user supplied text into a paint color
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not a `#rgb`, `#rrggbb` or `#rrggbbaa` hex color
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
}

/// Errors that can occur while loading a [`GridConfig`](crate::config::GridConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad color in config field `{field}`: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorParseError,
    },

    /// Cells must have a positive, finite edge length
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
