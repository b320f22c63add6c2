use chrono::{DateTime, NaiveDate, Utc};

use gradebook_core::db::SEASONS;
use gradebook_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a term season, accepting any letter case
pub fn parse_season(s: &str) -> std::result::Result<String, String> {
    SEASONS
        .iter()
        .find(|season| season.eq_ignore_ascii_case(s))
        .map(|season| season.to_string())
        .ok_or_else(|| format!("invalid season '{}' (expected one of: {})", s, SEASONS.join(", ")))
}

/// Parse a due date as RFC 3339 or a plain date (end of day UTC)
pub fn parse_due(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("invalid due date '{}' (expected YYYY-MM-DD or RFC 3339)", s))
}
