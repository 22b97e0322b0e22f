//! Human-readable formatting for byte counts and timestamps.
//!
//! `format_bytes` is pure arithmetic. `format_date` defers to the browser's
//! `Date` locale rendering when the `csr` feature is on, and to a fixed
//! UTC layout otherwise.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Fractional digits used when callers have no preference.
pub const DEFAULT_DECIMALS: i32 = 2;

/// Placeholder rendered for unparseable date strings.
pub const INVALID_DATE: &str = "Invalid Date";

/// Upper bound on fractional digits, matching the browser's `toFixed`.
const MAX_DECIMALS: i32 = 100;

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Render `bytes` with base-1024 units, e.g. `1536` → `"1.5 KB"`.
///
/// The value is rounded half away from zero to `decimals` fractional digits
/// and trailing zeros are dropped. Negative `decimals` counts as zero.
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }
    let decimals = decimals.clamp(0, MAX_DECIMALS);
    let exponent = bytes.ilog(1024).min(8);
    #[allow(clippy::cast_precision_loss)]
    let scaled = bytes as f64 / 1024_u64.pow(exponent) as f64;
    let precision = usize::try_from(decimals).unwrap_or(0);
    let rendered = format!("{:.precision$}", round_half_up(scaled, decimals));
    format!("{} {}", trim_fraction(&rendered), UNITS[exponent as usize])
}

// `format!` rounds exact ties to even; here ties round up (2.5 -> 3).
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let shifted = value * factor;
    // Past 2^53 every f64 is already integral at this scale.
    if shifted < 9_007_199_254_740_992.0 { shifted.round() / factor } else { value }
}

fn trim_fraction(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}

/// Render an ISO-like timestamp using the viewer's locale conventions.
///
/// Invalid input yields [`INVALID_DATE`].
pub fn format_date(date: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(date));
        if parsed.get_time().is_nan() {
            return INVALID_DATE.to_owned();
        }
        String::from(parsed.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        format_date_utc(date)
    }
}

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Accepts RFC 3339, offset-less `YYYY-MM-DDTHH:MM:SS[.fff]`, or a bare
/// `YYYY-MM-DD` date.
pub fn format_date_utc(date: &str) -> String {
    parse_timestamp(date).map_or_else(
        || INVALID_DATE.to_owned(),
        |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.naive_utc());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
