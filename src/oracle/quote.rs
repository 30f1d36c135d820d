// oracle/quote.rs
use crate::oracle::OracleError;
use scraper::{Html, Selector};

/// Grams in one troy ounce. Futures quotes are per troy ounce.
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Pull the raw market price text for `symbol` out of a quote page.
pub fn extract_quote(html: &str, symbol: &str) -> Result<String, OracleError> {
    let document = Html::parse_document(html);
    let css = format!(r#"fin-streamer[data-symbol="{symbol}"][data-field="regularMarketPrice"]"#);
    let selector = Selector::parse(&css).map_err(|e| OracleError::HtmlParse(e.to_string()))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or(OracleError::MissingQuote)?;

    let text: String = element.text().collect();
    let text = text.trim();
    if text.is_empty() {
        return Err(OracleError::MissingQuote);
    }

    Ok(text.to_string())
}

/// Parse a quote like `"2,345.60"` into a per-ounce price.
pub fn parse_quote_text(text: &str) -> Result<f64, OracleError> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();

    let price: f64 = cleaned
        .parse()
        .map_err(|_| OracleError::InvalidQuote(text.to_string()))?;

    if !price.is_finite() || price <= 0.0 {
        return Err(OracleError::InvalidQuote(text.to_string()));
    }

    Ok(price)
}
