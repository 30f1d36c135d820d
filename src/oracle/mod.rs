mod oracle_error;
mod quote;
mod yahoo;

pub use oracle_error::OracleError;
pub use yahoo::{OracleSettings, YahooQuoteOracle};

/// Source of the reference commodity price, normalized to currency per gram.
///
/// The engine treats implementations purely as "returns a number or fails";
/// anything that can produce a per-gram price can stand in for the scraper.
pub trait PriceOracle: Send + Sync {
    fn fetch_unit_price(&self) -> Result<f64, OracleError>;
}
