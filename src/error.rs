use thiserror::Error;

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Everything that can go wrong between posting the query form and
/// producing a list of offerings. Nothing is recovered locally; errors
/// bubble up to the run loop, which logs and halts.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (network error or non-success status).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The offerings page did not have the expected shape at one of the
    /// positional access points (missing table, short row, broken nested
    /// descendant chain).
    #[error("unexpected page structure: {0}")]
    Structure(String),

    /// A numeric column held text that does not parse as an integer.
    #[error("numeric field '{field}' did not parse: {value:?}")]
    Numeric { field: &'static str, value: String },
}

impl ScrapeError {
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    pub fn numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::Numeric {
            field,
            value: value.into(),
        }
    }
}
