//! Error type shared by every operation of the crate.

use thiserror::Error;

/// The error type for carto-brewery operations.
#[derive(Error, Debug)]
pub enum BreweryError {
    /// A string is not a `#RRGGBB` hexadecimal color.
    #[error("Format error: {input:?} is not a #RRGGBB hex color")]
    Format { input: String },

    /// A requested size is above the supported maximum.
    #[error("Range error: {what} {requested} exceeds the maximum of {max}")]
    Range { what: &'static str, requested: usize, max: usize },

    /// A required capability (statistics, tabular data) is not available.
    #[error("Dependency error: {capability} is required for this functionality")]
    Dependency { capability: &'static str },

    /// A name that is not in the scheme catalog.
    #[error("Unknown color scheme: {name}")]
    UnknownScheme { name: String },

    /// Invalid gradient parameters.
    #[error("Gradient error: {message}")]
    Gradient { message: String },

    /// No usable value to compute percentiles on.
    #[error("Empty series: no numeric value to compute quantiles from")]
    EmptySeries,

    /// Malformed tabular input.
    #[error("Tabular error: {message}")]
    Tabular { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`BreweryError`].
pub type Result<T> = std::result::Result<T, BreweryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message() {
        let e = BreweryError::Range { what: "palette size",
                                      requested: 254, max: 253 };
        assert_eq!(e.to_string(),
                   "Range error: palette size 254 exceeds the maximum of 253");
    }

    #[test]
    fn format_message_quotes_input() {
        let e = BreweryError::Format { input: "#12".into() };
        assert!(e.to_string().contains("\"#12\""));
    }
}
