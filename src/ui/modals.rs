use super::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn help_binding(key: &str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(desc),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        help_binding("/", "Enter a ticker symbol"),
        help_binding("Enter", "Run the analysis (while entering)"),
        help_binding("Esc", "Cancel ticker entry"),
        help_binding("r", "Re-run for the current ticker"),
        help_binding("?", "Show this help"),
        help_binding("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  [?/Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 50, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
