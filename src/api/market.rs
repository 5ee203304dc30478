use chrono::{DateTime, NaiveDate};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const YAHOO_CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// One trading day of history.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// Daily bars in chronological order. Empty when the provider has no usable
/// rows for the symbol.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    pub bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// First and last trading dates, for chart axis labels.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.bars.first()?.date, self.bars.last()?.date))
    }
}

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("chart API returned status {0}")]
    Status(StatusCode),
    #[error("malformed chart response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("chart API error: {0}")]
    Api(String),
}

// Chart API response structures
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartResultItem>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResultItem {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
    #[serde(default)]
    adjclose: Vec<ChartAdjClose>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuote {
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartAdjClose {
    adjclose: Option<Vec<Option<f64>>>,
}

/// Zip the provider's parallel arrays into bars. A row with a null close is
/// dropped; a null volume becomes zero. Adjusted closes are used when present
/// so the series reflects splits and dividends.
fn series_from_item(item: ChartResultItem) -> PriceSeries {
    let quote = item.indicators.quote.into_iter().next().unwrap_or_default();
    let adjusted = item
        .indicators
        .adjclose
        .into_iter()
        .next()
        .and_then(|a| a.adjclose);
    let closes = adjusted.or(quote.close).unwrap_or_default();
    let volumes = quote.volume.unwrap_or_default();

    let mut bars = Vec::with_capacity(item.timestamp.len());
    for (i, &ts) in item.timestamp.iter().enumerate() {
        let Some(close) = closes.get(i).copied().flatten() else {
            continue;
        };
        let Some(moment) = DateTime::from_timestamp(ts, 0) else {
            continue;
        };
        let volume = volumes.get(i).copied().flatten().unwrap_or(0);
        bars.push(PriceBar {
            date: moment.date_naive(),
            close,
            volume,
        });
    }

    PriceSeries { bars }
}

/// Parse a chart response body. A provider "Not Found" error (unknown or
/// delisted symbol) yields an empty series rather than an error; callers
/// treat an empty series as "no data" and must not retry.
fn parse_chart(body: &str, status: StatusCode) -> Result<PriceSeries, MarketError> {
    let data: ChartResponse = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            if !status.is_success() {
                return Err(MarketError::Status(status));
            }
            return Err(MarketError::Parse(e));
        }
    };

    if let Some(err) = data.chart.error {
        if err.code.as_deref() == Some("Not Found") {
            return Ok(PriceSeries::default());
        }
        let detail = err
            .description
            .or(err.code)
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(MarketError::Api(detail));
    }

    if !status.is_success() {
        return Err(MarketError::Status(status));
    }

    let item = match data.chart.result.and_then(|r| r.into_iter().next()) {
        Some(item) => item,
        None => return Ok(PriceSeries::default()),
    };

    Ok(series_from_item(item))
}

pub struct MarketClient {
    client: Client,
}

impl MarketClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    /// Fetch six calendar months of daily bars for a ticker.
    pub async fn fetch_daily_history(&self, ticker: &str) -> Result<PriceSeries, MarketError> {
        let url = format!("{}/{}", YAHOO_CHART_URL, ticker);

        let response = self
            .client
            .get(&url)
            .query(&[("range", "6mo"), ("interval", "1d")])
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_chart(&body, status)
    }
}

impl Default for MarketClient {
    fn default() -> Self {
        Self::new()
    }
}
