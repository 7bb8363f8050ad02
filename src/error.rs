use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("missing required columns {missing:?}; available columns: {available:?}")]
    Schema {
        missing: Vec<String>,
        available: Vec<String>,
    },

    #[error("failed to read source '{path}': {message}")]
    SourceRead { path: String, message: String },

    #[error("failed to write output '{path}': {message}")]
    OutputWrite { path: String, message: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
