use chrono::{DateTime, Utc};

/// Currency display used throughout the report, e.g. "$187.42".
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("{:.2}T", abs / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{:.2}B", abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.2}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.2}K", abs / 1_000.0)
    } else {
        format!("{:.0}", abs)
    }
}

pub fn format_volume(volume: u64) -> String {
    format_compact(volume as f64)
}

pub fn format_relative_time(ts: DateTime<Utc>) -> String {
    let elapsed_secs = Utc::now().timestamp() - ts.timestamp();
    if elapsed_secs < 0 {
        return "just now".to_string();
    }
    let mins = elapsed_secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    match () {
        _ if days > 0 => format!("{}d ago", days),
        _ if hours > 0 => format!("{}h ago", hours),
        _ if mins > 0 => format!("{}m ago", mins),
        _ => "just now".to_string(),
    }
}
