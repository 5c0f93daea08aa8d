use serde::{Deserialize, Serialize};
use std::fmt;

/// Certainty factor guaranteed to lie in [0.0, 1.0].
///
/// Expresses belief strength in a hypothesis. It is not a formal probability,
/// but independent pieces of supporting evidence accumulate with the noisy-OR
/// law implemented by [`Certainty::combine`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Certainty(f64);

impl Certainty {
    pub const ZERO: Certainty = Certainty(0.0);
    pub const ONE: Certainty = Certainty(1.0);

    /// Create a certainty, returning `None` for NaN or values outside [0.0, 1.0].
    pub fn new(value: f64) -> Option<Self> {
        if (0.0..=1.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create a certainty, clamping into [0.0, 1.0]. NaN maps to zero.
    pub fn saturating(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole-number percentage, truncated toward zero (0.982 -> 98).
    pub fn percent(self) -> u8 {
        (self.0 * 100.0) as u8
    }

    /// Combine two independent certainty estimates: `a + b * (1 - a)`.
    ///
    /// Equivalent to `1 - (1 - a)(1 - b)`, so the law is commutative and
    /// associative and the result never leaves [0.0, 1.0].
    pub fn combine(self, other: Certainty) -> Certainty {
        Self::saturating(self.0 + other.0 * (1.0 - self.0))
    }

    /// Fold any number of certainties onto a seed with [`Certainty::combine`].
    pub fn combine_all<I>(seed: Certainty, others: I) -> Certainty
    where
        I: IntoIterator<Item = Certainty>,
    {
        others.into_iter().fold(seed, Certainty::combine)
    }

    /// True when the two values differ by less than `epsilon`.
    pub fn approx_eq(self, other: Certainty, epsilon: f64) -> bool {
        (self.0 - other.0).abs() < epsilon
    }
}

/// Free-function form of [`Certainty::combine`] over raw values.
pub fn combine(a: f64, b: f64) -> f64 {
    a + b * (1.0 - a)
}

impl Default for Certainty {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

impl TryFrom<f64> for Certainty {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("certainty {value} is outside [0, 1]"))
    }
}

impl From<Certainty> for f64 {
    fn from(c: Certainty) -> Self {
        c.0
    }
}
