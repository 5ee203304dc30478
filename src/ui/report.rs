use super::formatters::{format_relative_time, format_usd};
use crate::api::Headline;
use crate::app::App;
use crate::report::Report;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_report(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(area);

    draw_summary(frame, chunks[0], app);
    draw_news(frame, chunks[1], app.report.as_ref());
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let report = app.report.as_ref();
    let title = match report {
        Some(r) => format!(" Market Analysis Report: {} ", r.ticker),
        None => " Market Analysis Report ".to_string(),
    };

    let lines: Vec<Line> = match report {
        Some(r) => match &r.prices {
            Some(p) => vec![
                summary_row("Last Close:    ", p.last_close),
                summary_row("6-Month High:  ", p.highest),
                summary_row("6-Month Low:   ", p.lowest),
            ],
            None => {
                // Same failed-vs-empty split as the chart panel
                let text = if app.market_failed {
                    "Stock data unavailable."
                } else {
                    "No stock data found for this ticker."
                };
                vec![Line::from(Span::styled(
                    text,
                    Style::default().fg(Color::DarkGray),
                ))]
            }
        },
        None => Vec::new(),
    };

    let summary = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(summary, area);
}

fn summary_row(label: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::raw(label.to_string()),
        Span::styled(
            format_usd(value),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn draw_news(frame: &mut Frame, area: Rect, report: Option<&Report>) {
    let lines: Vec<Line> = match report {
        Some(r) if !r.news.is_empty() => r
            .news
            .iter()
            .enumerate()
            .map(|(i, headline)| headline_row(i + 1, headline))
            .collect(),
        Some(_) => vec![Line::from(Span::styled(
            "No news found or API key missing.",
            Style::default().fg(Color::DarkGray),
        ))],
        None => Vec::new(),
    };

    let news = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Latest News "),
    );
    frame.render_widget(news, area);
}

fn headline_row(n: usize, headline: &Headline) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{}. ", n), Style::default().fg(Color::DarkGray)),
        Span::raw(headline.to_string()),
    ];
    if let Some(age) = headline.published_at.map(format_relative_time) {
        spans.push(Span::styled(
            format!("  {}", age),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
