use super::App;
use crate::api::{MarketError, NewsError, PriceSeries};
use crate::report::Report;
use chrono::Local;

impl App {
    /// Run the full pipeline for the current ticker: price history, then
    /// headlines, then the summary report. Neither fetch failing aborts the
    /// run; failures degrade to empty data plus a status-line warning, and
    /// the report is always rebuilt from whatever survived.
    pub async fn run_analysis(&mut self) {
        self.pending_run = false;
        if self.ticker.is_empty() {
            self.loading = false;
            return;
        }
        self.loading = true;
        let ticker = self.ticker.clone();

        let mut warnings: Vec<String> = Vec::new();

        let market_result = self.market.fetch_daily_history(&ticker).await;
        let series = self.record_market_result(market_result, &mut warnings);

        let news = match self
            .news
            .fetch(
                &ticker,
                self.config.news_api_key.as_deref(),
                self.config.news_limit,
            )
            .await
        {
            Ok(headlines) => headlines,
            Err(NewsError::Status(code)) => {
                warnings.push(format!("NewsAPI returned status {}", code.as_u16()));
                Vec::new()
            }
            Err(e) => {
                warnings.push(format!("Failed to fetch news: {}", e));
                Vec::new()
            }
        };

        self.report = Some(Report::build(&ticker, Some(&series), news));
        self.series = Some(series);
        self.last_updated = Some(Local::now().format("%H:%M:%S").to_string());
        self.status_message = if warnings.is_empty() {
            None
        } else {
            Some(warnings.join(" | "))
        };
        self.loading = false;
    }

    /// Fold the market fetch outcome into app state. A failed fetch degrades
    /// to an empty series but raises `market_failed`, so the draw pass can
    /// tell it apart from a ticker the provider has no rows for.
    fn record_market_result(
        &mut self,
        result: Result<PriceSeries, MarketError>,
        warnings: &mut Vec<String>,
    ) -> PriceSeries {
        match result {
            Ok(series) => {
                self.market_failed = false;
                series
            }
            Err(e) => {
                self.market_failed = true;
                warnings.push(format!("Error fetching stock data: {}", e));
                PriceSeries::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::PriceBar;
    use crate::config::Config;
    use chrono::NaiveDate;

    #[test]
    fn market_error_sets_the_failure_flag() {
        let mut app = App::new(Config::test_config());
        let mut warnings = Vec::new();
        let series =
            app.record_market_result(Err(MarketError::Api("boom".to_string())), &mut warnings);
        assert!(series.is_empty());
        assert!(app.market_failed);
        assert_eq!(warnings, vec!["Error fetching stock data: chart API error: boom"]);
    }

    #[test]
    fn market_success_clears_the_failure_flag() {
        let mut app = App::new(Config::test_config());
        app.market_failed = true;
        let mut warnings = Vec::new();
        let series = app.record_market_result(
            Ok(PriceSeries {
                bars: vec![PriceBar {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    close: 100.0,
                    volume: 1_000,
                }],
            }),
            &mut warnings,
        );
        assert!(!app.market_failed);
        assert_eq!(series.len(), 1);
        assert!(warnings.is_empty());
    }
}
