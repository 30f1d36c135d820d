// oracle/yahoo.rs
use crate::oracle::quote::{extract_quote, parse_quote_text, TROY_OUNCE_GRAMS};
use crate::oracle::{OracleError, PriceOracle};
use rand::Rng;
use reqwest::blocking::Client;
use std::time::{Duration, Instant};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Knobs for the quote page fetch.
#[derive(Debug, Clone)]
pub struct OracleSettings {
    pub quote_url: String,
    pub symbol: String,
    pub timeout: Duration,
    /// Total attempts per call, including the first one.
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self {
            quote_url: "https://finance.yahoo.com/quote/GC=F/".to_string(),
            symbol: "GC=F".to_string(),
            timeout: Duration::from_secs(10),
            max_attempts: 2,
            backoff: Duration::from_millis(500),
        }
    }
}

/// Scrapes the gold futures price off the Yahoo Finance quote page.
pub struct YahooQuoteOracle {
    client: Client,
    settings: OracleSettings,
}

impl YahooQuoteOracle {
    pub fn new(settings: OracleSettings) -> Result<Self, OracleError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn fetch_html(&self) -> Result<String, OracleError> {
        const JITTER_MAX_MILLIS: u64 = 250;

        let attempts = self.settings.max_attempts.max(1);
        let mut last_err = None;

        for attempt in 1..=attempts {
            let start = Instant::now();

            match self.try_fetch_html() {
                Ok(html) => {
                    tracing::debug!(attempt, elapsed = ?start.elapsed(), "quote page fetched");
                    return Ok(html);
                }
                Err(e) => {
                    tracing::warn!(attempt, elapsed = ?start.elapsed(), error = %e, "quote page fetch failed");
                    last_err = Some(e);

                    if attempt < attempts {
                        let jitter = rand::thread_rng().gen_range(0..=JITTER_MAX_MILLIS);
                        std::thread::sleep(self.settings.backoff + Duration::from_millis(jitter));
                    }
                }
            }
        }

        Err(last_err.unwrap_or_else(|| OracleError::Network("quote retry loop failed".into())))
    }

    fn try_fetch_html(&self) -> Result<String, OracleError> {
        let resp = self
            .client
            .get(&self.settings.quote_url)
            .send()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        resp.text().map_err(|e| OracleError::Network(e.to_string()))
    }
}

impl PriceOracle for YahooQuoteOracle {
    fn fetch_unit_price(&self) -> Result<f64, OracleError> {
        let html = self.fetch_html()?;
        let text = extract_quote(&html, &self.settings.symbol)?;
        let per_ounce = parse_quote_text(&text)?;
        let per_gram = per_ounce / TROY_OUNCE_GRAMS;

        tracing::info!(symbol = %self.settings.symbol, per_ounce, per_gram, "gold price fetched");
        Ok(per_gram)
    }
}
