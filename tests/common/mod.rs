#![allow(dead_code)]

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use marketbrief::api::{Headline, PriceBar, PriceSeries};
use marketbrief::app::App;
use marketbrief::config::Config;

pub fn make_bar(date: NaiveDate, close: f64, volume: u64) -> PriceBar {
    PriceBar {
        date,
        close,
        volume,
    }
}

/// Series of consecutive calendar days starting 2024-01-02, one bar per close.
pub fn make_series(closes: &[f64]) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar {
            date: start + Duration::days(i as i64),
            close,
            volume: 1_000_000,
        })
        .collect();
    PriceSeries { bars }
}

pub fn make_headline(title: &str, source: &str) -> Headline {
    Headline {
        title: title.to_string(),
        source: source.to_string(),
        published_at: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
    }
}

// Creates a default App instance for testing (no file I/O).
pub fn test_app() -> App {
    App::new(Config::test_config())
}
