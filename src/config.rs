//! Rendering configuration.
//!
//! [`DisplayConfig`] controls how [`Value::render`](crate::Value::render) turns a boxed
//! value into text. The [`Display`](std::fmt::Display) implementation of every value
//! kind uses [`DisplayConfig::canonical()`], which produces the canonical text forms:
//!
//! | Kind | Canonical form |
//! |------|----------------|
//! | Bool | `true` / `false` |
//! | Int, BigInt | plain decimal |
//! | Float, Double | fixed-point with six fractional digits (`1.500000`) |
//! | Ratio | `<numerator> / <denominator>` |
//! | Tuple | JSON array of the unboxed items |
//!
//! # Configuration Presets
//!
//! - [`DisplayConfig::canonical()`] - The canonical text forms above
//! - [`DisplayConfig::compact()`] - Shortest round-trip floats, `n/d` ratios
//!
//! # Example
//!
//! ```rust
//! use boxval::{DisplayConfig, Value};
//!
//! let config = DisplayConfig::canonical().with_float_precision(Some(2));
//! assert_eq!(Value::Double(1.0 / 3.0).render(&config), "0.33");
//! ```

/// Controls the text rendering of boxed values.
///
/// # Default Configuration
///
/// Equivalent to [`DisplayConfig::canonical()`]:
/// - 6 fractional digits for floating kinds
/// - `" / "` between ratio components
/// - single-line tuple rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Number of fractional digits printed for `Float` and `Double`.
    ///
    /// `None` prints the shortest text that parses back to the same value.
    pub float_precision: Option<usize>,

    /// Separator printed between the numerator and denominator of a ratio.
    pub ratio_separator: &'static str,

    /// Render tuples as indented multi-line JSON.
    pub pretty_tuples: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::canonical()
    }
}

impl DisplayConfig {
    /// Creates the default configuration.
    ///
    /// Use the `with_*` methods to customize individual settings.
    #[must_use]
    pub const fn new() -> Self {
        Self::canonical()
    }

    /// The canonical text forms used by `Display`.
    #[must_use]
    pub const fn canonical() -> Self {
        DisplayConfig {
            float_precision: Some(6),
            ratio_separator: " / ",
            pretty_tuples: false,
        }
    }

    /// Short renderings: shortest round-trip floats and `n/d` ratios.
    #[must_use]
    pub const fn compact() -> Self {
        DisplayConfig {
            float_precision: None,
            ratio_separator: "/",
            pretty_tuples: false,
        }
    }

    /// Sets the number of fractional digits for floating kinds.
    ///
    /// # Arguments
    ///
    /// * `precision` - Fractional digits, or `None` for shortest round-trip text
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining.
    #[must_use]
    pub const fn with_float_precision(mut self, precision: Option<usize>) -> Self {
        self.float_precision = precision;
        self
    }

    /// Sets the separator printed between ratio components.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining.
    #[must_use]
    pub const fn with_ratio_separator(mut self, separator: &'static str) -> Self {
        self.ratio_separator = separator;
        self
    }

    /// Enables or disables multi-line tuple rendering.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining.
    #[must_use]
    pub const fn with_pretty_tuples(mut self, pretty: bool) -> Self {
        self.pretty_tuples = pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        assert_eq!(DisplayConfig::default(), DisplayConfig::canonical());
        assert_eq!(DisplayConfig::new().float_precision, Some(6));
        assert_eq!(DisplayConfig::new().ratio_separator, " / ");
    }

    #[test]
    fn test_compact_preset() {
        let config = DisplayConfig::compact();
        assert_eq!(config.float_precision, None);
        assert_eq!(config.ratio_separator, "/");
        assert!(!config.pretty_tuples);
    }

    #[test]
    fn test_builder() {
        let config = DisplayConfig::new()
            .with_float_precision(Some(2))
            .with_ratio_separator(":")
            .with_pretty_tuples(true);

        assert_eq!(config.float_precision, Some(2));
        assert_eq!(config.ratio_separator, ":");
        assert!(config.pretty_tuples);
    }
}
