use crate::api::{Headline, PriceSeries};

/// Close-price statistics over the fetched window. Either all three values
/// exist or the report carries none of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub last_close: f64,
    pub highest: f64,
    pub lowest: f64,
}

impl PriceSummary {
    fn from_series(series: &PriceSeries) -> Option<Self> {
        let last = series.bars.last()?;
        let closes = || series.bars.iter().map(|b| b.close);
        Some(Self {
            last_close: last.close,
            highest: closes().fold(f64::NEG_INFINITY, f64::max),
            lowest: closes().fold(f64::INFINITY, f64::min),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub ticker: String,
    pub prices: Option<PriceSummary>,
    pub news: Vec<Headline>,
}

impl Report {
    /// Reduce fetched data to the displayed summary. Never fails: an absent
    /// or empty series simply leaves `prices` unset, and the headline list
    /// passes through untouched, in provider order.
    pub fn build(ticker: &str, series: Option<&PriceSeries>, news: Vec<Headline>) -> Self {
        let prices = series.and_then(PriceSummary::from_series);
        Self {
            ticker: ticker.to_string(),
            prices,
            news,
        }
    }
}
