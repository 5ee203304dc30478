mod api;
mod app;
mod config;
mod report;
mod ui;

use anyhow::Result;
use app::{App, InputMode};
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "marketbrief")]
#[command(about = "Terminal UI for quick single-ticker stock research", long_about = None)]
struct Cli {
    /// Ticker to analyze on startup (defaults to the configured ticker)
    ticker: Option<String>,

    /// Number of headlines to fetch
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(ticker) = cli.ticker {
        config.default_ticker = ticker;
    }
    if let Some(limit) = cli.limit {
        config.news_limit = limit;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    if app.ticker.is_empty() {
        app.start_ticker_entry();
    } else {
        app.request_run();
    }

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Queued fetches run after a draw so the loading state is visible
        if app.pending_run {
            app.run_analysis().await;
            continue;
        }

        // 100ms timeout keeps the clock updating smoothly
        let timeout = Duration::from_millis(100);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Char('?') => app.show_help(),
                        KeyCode::Char('/') => app.start_ticker_entry(),
                        KeyCode::Char('r') => app.request_run(),
                        _ => {}
                    },
                    InputMode::EditTicker => match key.code {
                        KeyCode::Enter => {
                            if app.confirm_ticker() {
                                app.request_run();
                            }
                        }
                        KeyCode::Esc => app.cancel_input(),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Char(c) => {
                            // Tickers: letters, digits, and the separators
                            // Yahoo accepts (BRK.B, BTC-USD, ^GSPC)
                            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '^' {
                                app.input_buffer.push(c.to_ascii_uppercase());
                            }
                        }
                        _ => {}
                    },
                    InputMode::Help => match key.code {
                        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                        _ => {}
                    },
                }
            }
        }
    }
}
