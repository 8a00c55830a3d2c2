//! Display formatting helpers shared by the portal views

use chrono::{DateTime, Utc};

/// Whole-dollar currency with thousands separators, e.g. `$48,500`
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Human-readable file size, e.g. `1.4 MB`
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let size = bytes as f64;
    if size >= MB {
        format!("{:.1} MB", size / MB)
    } else if size >= KB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Abbreviated calendar date, e.g. `Jun 3, 2025`
pub fn format_date(instant: DateTime<Utc>) -> String {
    instant.format("%b %-d, %Y").to_string()
}

/// Relative age against a supplied now, e.g. `3 days ago`
///
/// `now` is a parameter rather than the wall clock so callers (and tests)
/// get deterministic output.
pub fn format_relative_date(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(instant);
    if delta.num_seconds() < 60 {
        return "just now".to_string();
    }
    let minutes = delta.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = delta.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = delta.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    let months = days / 30;
    if months < 12 {
        return plural(months, "month");
    }
    plural(days / 365, "year")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(48_500.0), "$48,500");
        assert_eq!(format_currency(1_250_000.0), "$1,250,000");
        assert_eq!(format_currency(-12_000.0), "-$12,000");
    }

    #[test]
    fn test_currency_rounds_cents() {
        assert_eq!(format_currency(1_999.6), "$2,000");
    }

    #[test]
    fn test_file_size_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(45_056), "44.0 KB");
        assert_eq!(format_file_size(5_242_880), "5.0 MB");
    }

    #[test]
    fn test_calendar_date() {
        assert_eq!(format_date(at("2025-06-03T14:30:00Z")), "Jun 3, 2025");
        assert_eq!(format_date(at("2025-12-25T00:00:00Z")), "Dec 25, 2025");
    }

    #[test]
    fn test_relative_date_buckets() {
        let now = at("2025-06-15T12:00:00Z");
        assert_eq!(format_relative_date(at("2025-06-15T11:59:30Z"), now), "just now");
        assert_eq!(format_relative_date(at("2025-06-15T11:15:00Z"), now), "45 minutes ago");
        assert_eq!(format_relative_date(at("2025-06-15T09:00:00Z"), now), "3 hours ago");
        assert_eq!(format_relative_date(at("2025-06-12T12:00:00Z"), now), "3 days ago");
        assert_eq!(format_relative_date(at("2025-04-10T12:00:00Z"), now), "2 months ago");
        assert_eq!(format_relative_date(at("2023-06-15T12:00:00Z"), now), "2 years ago");
    }

    #[test]
    fn test_relative_date_singular_units() {
        let now = at("2025-06-15T12:00:00Z");
        assert_eq!(format_relative_date(at("2025-06-14T12:00:00Z"), now), "1 day ago");
        assert_eq!(format_relative_date(at("2025-06-15T11:00:00Z"), now), "1 hour ago");
    }
}
