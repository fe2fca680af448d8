//! Exact-arity delimiter splitting.
//!
//! Every grammar level splits on a single literal delimiter and must yield
//! exactly the number of components the grammar declares. Empty components
//! count; `a,,b` splits into three.

use fpn_foundation::{Error, FieldLevel, Result};

/// Splits `input` on the delimiter for `level`, requiring exactly `N` parts.
///
/// # Errors
///
/// Returns a `MalformedField` error carrying `input` when the split yields
/// any other number of components.
pub fn split_exact<const N: usize>(input: &str, level: FieldLevel) -> Result<[&str; N]> {
    debug_assert_eq!(N, level.arity(), "arity mismatch for {level} split");

    let parts: Vec<&str> = input.split(level.delimiter()).collect();
    <[&str; N]>::try_from(parts)
        .map_err(|parts| Error::malformed_field(level, input, N, parts.len()))
}
