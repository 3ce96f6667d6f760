//! Optional numeric settings read from the environment.

use std::fmt::Display;
use std::str::FromStr;

/// Read `var` as a `T`, falling back to `default`.
///
/// Surrounding whitespace is ignored and a blank value counts as unset.
/// A value that does not parse is logged with the parse error and replaced by `default`.
pub fn env_parse_with_default<T>(var: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Ok(raw) = std::env::var(var) else {
        return default;
    };
    let value = raw.trim();
    if value.is_empty() {
        return default;
    }
    value.parse().unwrap_or_else(|err: T::Err| {
        tracing::warn!(var, value, error = %err, default = %default, "ignoring unparsable setting");
        default
    })
}
