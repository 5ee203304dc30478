use chrono::{Duration, Utc};
use marketbrief::ui::formatters::*;

// --- format_usd ---

#[test]
fn test_usd_two_decimals() {
    assert_eq!(format_usd(1234.5), "$1234.50");
    assert_eq!(format_usd(50.0), "$50.00");
}

#[test]
fn test_usd_rounds_to_cents() {
    assert_eq!(format_usd(199.999), "$200.00");
    assert_eq!(format_usd(0.004), "$0.00");
}

#[test]
fn test_usd_zero() {
    assert_eq!(format_usd(0.0), "$0.00");
}

// --- format_compact ---

#[test]
fn test_compact_trillions() {
    assert_eq!(format_compact(2_500_000_000_000.0), "2.50T");
}

#[test]
fn test_compact_billions() {
    assert_eq!(format_compact(41_200_000_000.0), "41.20B");
}

#[test]
fn test_compact_millions() {
    assert_eq!(format_compact(7_300_000.0), "7.30M");
}

#[test]
fn test_compact_thousands() {
    assert_eq!(format_compact(12_500.0), "12.50K");
}

#[test]
fn test_compact_small() {
    assert_eq!(format_compact(999.0), "999");
}

#[test]
fn test_compact_zero() {
    assert_eq!(format_compact(0.0), "0");
}

#[test]
fn test_compact_boundary_thousand() {
    assert_eq!(format_compact(1_000.0), "1.00K");
}

#[test]
fn test_compact_boundary_million() {
    assert_eq!(format_compact(1_000_000.0), "1.00M");
}

#[test]
fn test_compact_negative_uses_abs() {
    assert_eq!(format_compact(-5_000_000.0), "5.00M");
}

// --- format_volume ---

#[test]
fn test_volume_large() {
    assert_eq!(format_volume(123_456_789), "123.46M");
}

#[test]
fn test_volume_zero() {
    assert_eq!(format_volume(0), "0");
}

// --- format_relative_time ---

#[test]
fn test_relative_time_future() {
    let ts = Utc::now() + Duration::hours(1);
    assert_eq!(format_relative_time(ts), "just now");
}

#[test]
fn test_relative_time_just_now() {
    let ts = Utc::now() - Duration::seconds(30);
    assert_eq!(format_relative_time(ts), "just now");
}

#[test]
fn test_relative_time_minutes() {
    let ts = Utc::now() - Duration::minutes(5);
    assert_eq!(format_relative_time(ts), "5m ago");
}

#[test]
fn test_relative_time_hours() {
    let ts = Utc::now() - Duration::hours(3);
    assert_eq!(format_relative_time(ts), "3h ago");
}

#[test]
fn test_relative_time_days() {
    let ts = Utc::now() - Duration::days(2);
    assert_eq!(format_relative_time(ts), "2d ago");
}
