use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use log::debug;

pub const DEFAULT_TRUNCATE_LEN: usize = 100;

const MISSING: &str = "-";
const DISPLAY_FORMAT: &str = "%d.%m.%Y, %H:%M";

// The backend serializes naive `datetime.now()` values, with or without micros.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Renders an API timestamp as `DD.MM.YYYY, HH:MM`.
///
/// Offset-aware timestamps are converted to local time; naive ones are
/// already local and shown as-is. Missing, empty or unparsable input gives `-`.
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return MISSING.to_string(),
    };

    if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        return aware.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.format(DISPLAY_FORMAT).to_string();
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight.format(DISPLAY_FORMAT).to_string();
    }

    debug!("Unparsable date '{}'", raw);
    MISSING.to_string()
}

/// Cuts `text` to `max_len` characters and appends `...` when anything was cut.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dates() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(Some("   ")), "-");
        assert_eq!(format_date(Some("not a date")), "-");
    }

    #[test]
    fn test_naive_backend_timestamps() {
        assert_eq!(format_date(Some("2024-03-05T14:07:09.123456")), "05.03.2024, 14:07");
        assert_eq!(format_date(Some("2024-03-05T14:07:09")), "05.03.2024, 14:07");
        assert_eq!(format_date(Some("2024-12-31 23:59:00")), "31.12.2024, 23:59");
        assert_eq!(format_date(Some("2024-01-02")), "02.01.2024, 00:00");
    }

    #[test]
    fn test_offset_timestamps_are_localized() {
        let raw = "2024-03-05T14:07:09+00:00";
        let expected = DateTime::parse_from_rfc3339(raw)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY_FORMAT)
            .to_string();
        assert_eq!(format_date(Some(raw)), expected);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("abc", 5), "abc");
        assert_eq!(truncate_text("abcde", 5), "abcde");
        assert_eq!(truncate_text("abcdefgh", 5), "abcde...");
        assert_eq!(truncate_text("", 0), "");
        assert_eq!(truncate_text("x", 0), "...");
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_text("Привет, мир", 6), "Привет...");
        assert_eq!(truncate_text("Привет", 6), "Привет");
    }
}
