//! Text rendering of boxed values.

use std::fmt;

use crate::{
    collections::{Optional, Tuple},
    config::DisplayConfig,
    value::Value,
};

/// Adapter rendering a value with an explicit [`DisplayConfig`].
struct Rendered<'a> {
    value: &'a Value,
    config: &'a DisplayConfig,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.config;
        match self.value {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Trit(t) => write!(f, "{t}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::BigInt(n) => write!(f, "{n}"),
            Value::Ratio(r) => write!(
                f,
                "{}{}{}",
                r.numerator(),
                config.ratio_separator,
                r.denominator()
            ),
            Value::Float(x) => match config.float_precision {
                Some(precision) => write!(f, "{x:.precision$}"),
                None => write!(f, "{x}"),
            },
            Value::Double(x) => match config.float_precision {
                Some(precision) => write!(f, "{x:.precision$}"),
                None => write!(f, "{x}"),
            },
            Value::Tuple(t) => write_tuple(f, t, config),
            Value::Optional(o) => match o.get() {
                Some(inner) => write!(
                    f,
                    "Some({})",
                    Rendered {
                        value: inner,
                        config
                    }
                ),
                None => f.write_str("None"),
            },
        }
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, tuple: &Tuple, config: &DisplayConfig) -> fmt::Result {
    let native = tuple.unbox(usize::MAX);
    let text = if config.pretty_tuples {
        serde_json::to_string_pretty(&native)
    } else {
        serde_json::to_string(&native)
    };
    f.write_str(&text.map_err(|_| fmt::Error)?)
}

impl Value {
    /// Renders this value as text using `config`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxval::{DisplayConfig, Ratio, Value};
    ///
    /// let half = Value::Ratio(Ratio::new(1, 2)?);
    /// assert_eq!(half.render(&DisplayConfig::canonical()), "1 / 2");
    /// assert_eq!(half.render(&DisplayConfig::compact()), "1/2");
    /// # Ok::<(), boxval::Error>(())
    /// ```
    #[must_use]
    pub fn render(&self, config: &DisplayConfig) -> String {
        Rendered {
            value: self,
            config,
        }
        .to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Rendered {
            value: self,
            config: &DisplayConfig::canonical(),
        }
        .fmt(f)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, self, &DisplayConfig::canonical())
    }
}

impl fmt::Display for Optional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(inner) => write!(f, "Some({inner})"),
            None => f.write_str("None"),
        }
    }
}
