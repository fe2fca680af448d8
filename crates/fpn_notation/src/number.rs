//! Integer parsing and unit scaling.
//!
//! Every numeric notation field is a base-10 integer with an optional sign
//! and no other characters. Scaling into model units happens here so the
//! decoder never stores a raw integer for a scaled field.

use fpn_foundation::{Error, Result};

/// Divisor for percentage fields (`balance`, `fatigue`, `damage`, `weight`).
pub const PERCENT_SCALE: f64 = 100.0;

/// Divisor for linear momentum, which the notation stores in tenths.
pub const TENTHS_SCALE: f64 = 10.0;

/// Token that marks the recovering flag as set.
pub const RECOVERING_FLAG: &str = "1";

/// Parses a signed base-10 integer.
///
/// # Errors
///
/// Returns `InvalidNumber` if the token is empty, contains anything other
/// than an optional sign and digits, or overflows `i32`.
pub fn parse_int(field: &'static str, token: &str) -> Result<i32> {
    token
        .parse::<i32>()
        .map_err(|_| Error::invalid_number(field, token))
}

/// Parses a non-negative base-10 integer.
///
/// # Errors
///
/// Returns `InvalidNumber` for negative values as well as malformed tokens.
pub fn parse_unsigned(field: &'static str, token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| Error::invalid_number(field, token))
}

/// Parses an integer percentage and scales it to a fraction.
///
/// # Errors
///
/// Returns `InvalidNumber` if the token is not an integer.
pub fn parse_percent(field: &'static str, token: &str) -> Result<f64> {
    parse_int(field, token).map(|raw| f64::from(raw) / PERCENT_SCALE)
}

/// Parses an integer count of tenths and scales it to units.
///
/// # Errors
///
/// Returns `InvalidNumber` if the token is not an integer.
pub fn parse_tenths(field: &'static str, token: &str) -> Result<f64> {
    parse_int(field, token).map(|raw| f64::from(raw) / TENTHS_SCALE)
}

/// Interprets the recovering flag. Only the exact token `1` is true.
#[must_use]
pub fn parse_flag(token: &str) -> bool {
    token == RECOVERING_FLAG
}
