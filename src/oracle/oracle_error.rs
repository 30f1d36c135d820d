use thiserror::Error;

/// Every way the price source can let us down. All of them mean the gold
/// price is unavailable for this request.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Quote source returned HTTP {0}")]
    Status(u16),
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("Quote element not found or empty")]
    MissingQuote,
    #[error("Quote value is not a valid price: {0:?}")]
    InvalidQuote(String),
}
