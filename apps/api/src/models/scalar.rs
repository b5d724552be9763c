use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A JSON leaf that is either a number or a string.
///
/// The backend is loose about ids, rates and durations: the same field arrives
/// as `50` from one record and `"50"` from another. Both are kept verbatim and
/// render the way a browser would print them: whole floats drop the fraction,
/// so `85.0` prints as `85`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Converts a raw JSON value, keeping only strings and numbers.
    pub fn from_value(value: &Value) -> Option<Scalar> {
        match value {
            Value::Number(n) => Some(Scalar::Number(n.clone())),
            Value::String(s) => Some(Scalar::Text(s.clone())),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Number(_) => false,
            Scalar::Text(s) => s.trim().is_empty(),
        }
    }

    /// Numeric reading of the value. Text is parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e21 => {
                    // -0.0 prints as "0" in a browser.
                    let x = if x == 0.0 { 0.0 } else { x };
                    write!(f, "{x:.0}")
                }
                _ => write!(f, "{n}"),
            },
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(Number::from(n))
    }
}
