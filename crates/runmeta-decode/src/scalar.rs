//! Single-value coercers: one flat string → one typed scalar.
//!
//! None of these fail. Each has a fixed fallback for absent or malformed
//! input, and absent vs. malformed are indistinguishable in the result.

use chrono::{NaiveDateTime, TimeZone, Utc};
use runmeta_core::types::{zero_timestamp, MaybeBool, RunAuthority, Timestamp};
use runmeta_core::FlatSource;

use crate::diag;

/// Agent timestamp layout: `YYYYMMDDThhmmss` with optional `.fraction`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%S%.f";

/// Raw value, or `default` when the key is absent.
pub fn get_string<S: FlatSource + ?Sized>(src: &S, key: &str, default: &str) -> String {
    src.get(key).unwrap_or(default).to_string()
}

/// Raw value if present. Used where presence itself means something.
pub fn get_optional_string<S: FlatSource + ?Sized>(src: &S, key: &str) -> Option<String> {
    src.get(key).map(str::to_string)
}

/// Absent or empty → `default`; otherwise true iff the value is exactly
/// `"true"`. Any other text, not just `"false"`, reads as false.
pub fn get_bool<S: FlatSource + ?Sized>(src: &S, key: &str, default: bool) -> bool {
    match src.get(key) {
        None | Some("") => default,
        Some(v) => v == "true",
    }
}

pub fn get_maybe_bool<S: FlatSource + ?Sized>(src: &S, key: &str) -> MaybeBool {
    parse_maybe_bool(src.get(key).unwrap_or(""))
}

pub fn parse_maybe_bool(raw: &str) -> MaybeBool {
    match raw {
        "true" => MaybeBool::True,
        "false" => MaybeBool::False,
        _ => MaybeBool::Unknown,
    }
}

pub fn get_run_authority<S: FlatSource + ?Sized>(src: &S, key: &str) -> RunAuthority {
    parse_run_authority(src.get(key).unwrap_or(""))
}

/// Unknown values become `Correction` so that they get looked at.
pub fn parse_run_authority(raw: &str) -> RunAuthority {
    match raw {
        "workload" => RunAuthority::Workload,
        "derived" => RunAuthority::Derived,
        "correction" => RunAuthority::Correction,
        _ => RunAuthority::Correction,
    }
}

/// Base-10 integer, or `default` when absent or unparsable.
pub fn get_i64<S: FlatSource + ?Sized>(src: &S, key: &str, default: i64) -> i64 {
    match src.get(key) {
        None => default,
        Some(raw) => raw.parse::<i64>().unwrap_or_else(|_| {
            diag::fallback(key, "not an integer");
            default
        }),
    }
}

/// Decimal float, or `default` when absent or unparsable.
pub fn get_f64<S: FlatSource + ?Sized>(src: &S, key: &str, default: f64) -> f64 {
    match src.get(key) {
        None => default,
        Some(raw) => raw.parse::<f64>().unwrap_or_else(|_| {
            diag::fallback(key, "not a number");
            default
        }),
    }
}

/// Agent timestamp in UTC, or the zero timestamp when absent or malformed.
pub fn get_timestamp<S: FlatSource + ?Sized>(src: &S, key: &str) -> Timestamp {
    match src.get(key) {
        None | Some("") => zero_timestamp(),
        Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
            diag::fallback(key, "not an agent timestamp");
            zero_timestamp()
        }),
    }
}

/// Parse `YYYYMMDDThhmmss[.fraction]`. The date and time parts are fixed
/// width; the fraction may have any precision down to nanoseconds.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    let bytes = raw.as_bytes();
    let fixed_width = bytes.len() >= 15
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[8] == b'T'
        && bytes[9..15].iter().all(u8::is_ascii_digit);
    if !fixed_width {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&naive))
}
