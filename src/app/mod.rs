mod analysis;

use crate::api::{MarketClient, NewsClient, PriceSeries};
use crate::config::Config;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditTicker,
    Help,
}

pub struct App {
    pub config: Config,
    pub ticker: String,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub loading: bool,
    pub pending_run: bool,
    // True when the last run's market fetch errored, as opposed to the
    // provider returning no rows. The panels word their placeholders
    // differently for the two cases.
    pub market_failed: bool,
    pub last_updated: Option<String>,
    pub series: Option<PriceSeries>,
    pub report: Option<Report>,
    market: MarketClient,
    news: NewsClient,
}

impl App {
    pub fn new(config: Config) -> Self {
        let status_message = config
            .news_api_key
            .is_none()
            .then(|| "No NewsAPI key configured; news will be skipped".to_string());
        Self {
            // A config-file ticker gets the same normalization as
            // interactive entry
            ticker: config.default_ticker.to_uppercase(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message,
            loading: false,
            pending_run: false,
            market_failed: false,
            last_updated: None,
            series: None,
            report: None,
            market: MarketClient::new(),
            news: NewsClient::new(),
            config,
        }
    }

    /// Queue an analysis for the current ticker. The fetch itself happens on
    /// the next pass of the event loop, after a draw, so the loading state is
    /// on screen while the requests run.
    pub fn request_run(&mut self) {
        if self.ticker.is_empty() {
            return;
        }
        self.pending_run = true;
        self.loading = true;
        self.status_message = Some(format!("Fetching {}...", self.ticker));
    }

    pub fn start_ticker_entry(&mut self) {
        self.input_mode = InputMode::EditTicker;
        self.input_buffer.clear();
    }

    /// Apply the entered ticker. Returns false when the buffer was blank, in
    /// which case the previous ticker stays in place.
    pub fn confirm_ticker(&mut self) -> bool {
        let entered = self.input_buffer.trim().to_uppercase();
        self.input_buffer.clear();
        self.input_mode = InputMode::Normal;
        if entered.is_empty() {
            return false;
        }
        self.ticker = entered;
        true
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
