use super::formatters::{format_usd, format_volume};
use crate::api::PriceSeries;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

/// Two stacked panels over the same trading window: closing price on top,
/// volume below.
pub fn draw_charts(frame: &mut Frame, area: Rect, app: &App) {
    let series = match &app.series {
        Some(series) if !series.is_empty() => series,
        Some(_) => {
            // An empty series after a failed fetch is not "no data exists";
            // the footer carries the actual error
            let text = if app.market_failed {
                "Chart unavailable."
            } else {
                "No stock data found for this ticker."
            };
            draw_placeholder(frame, area, text);
            return;
        }
        None => {
            let text = if app.loading {
                "Loading chart..."
            } else {
                "Press / to enter a ticker"
            };
            draw_placeholder(frame, area, text);
            return;
        }
    };

    let window_label = series
        .date_span()
        .map(|(first, last)| {
            format!(" {} to {} ", first.format("%b %d"), last.format("%b %d %Y"))
        })
        .unwrap_or_default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_price_panel(frame, chunks[0], series, &window_label);
    draw_volume_panel(frame, chunks[1], series);
}

fn draw_price_panel(frame: &mut Frame, area: Rect, series: &PriceSeries, window_label: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(20)])
        .split(area);

    let closes: Vec<f64> = series.bars.iter().map(|b| b.close).collect();
    let max = closes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = closes.iter().cloned().fold(f64::INFINITY, f64::min);
    let range = max - min;
    let data: Vec<u64> = if range > 0.0 {
        closes
            .iter()
            .map(|&v| ((v - min) / range * 100.0) as u64)
            .collect()
    } else {
        closes.iter().map(|_| 50u64).collect()
    };

    let y_axis_content = vec![
        Line::from(Span::styled(format_usd(max), Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(format_usd(min), Style::default().fg(Color::Red))),
    ];
    let y_axis = Paragraph::new(y_axis_content)
        .alignment(Alignment::Right)
        .block(Block::default().title(" Close ").borders(Borders::TOP));
    frame.render_widget(y_axis, chunks[0]);

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title(window_label.to_string())
                .borders(Borders::TOP),
        )
        .data(&data)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(sparkline, chunks[1]);
}

fn draw_volume_panel(frame: &mut Frame, area: Rect, series: &PriceSeries) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(20)])
        .split(area);

    let volumes: Vec<u64> = series.bars.iter().map(|b| b.volume).collect();
    let max = volumes.iter().copied().max().unwrap_or(0);

    let y_axis_content = vec![
        Line::from(Span::styled(format_volume(max), Style::default().fg(Color::Green))),
        Line::from(""),
        Line::from(Span::styled("0", Style::default().fg(Color::DarkGray))),
    ];
    let y_axis = Paragraph::new(y_axis_content)
        .alignment(Alignment::Right)
        .block(Block::default().title(" Volume ").borders(Borders::TOP));
    frame.render_widget(y_axis, chunks[0]);

    let sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::TOP))
        .data(&volumes)
        .style(Style::default().fg(Color::Magenta));
    frame.render_widget(sparkline, chunks[1]);
}

fn draw_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let msg = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Chart "));
    frame.render_widget(msg, area);
}
