//! Depreciation value curves.
//!
//! A curve maps elapsed time to the present value of an asset sliding from
//! its acquisition cost toward a residual value. Evaluation is pure decimal
//! arithmetic and performs no rounding; the schedule builder owns the
//! rounding contract.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The shape of the depreciation curve.
///
/// Exactly two shapes exist, so dispatch is a closed enum rather than an
/// open registry of named functions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Quadratic curve with zero slope at end of life: value drops fastest
    /// right after acquisition and flattens toward the residual.
    #[default]
    Parabola,
    /// Straight-line depreciation at a constant daily rate.
    Linear,
}

impl Method {
    /// Present value after `elapsed_days` of a life spanning `total_days`.
    ///
    /// Both shapes are anchored so that the value at day 0 is `start_value`
    /// and the value at `total_days` is `end_value`. No ordering constraint
    /// is placed on the two values; the formula yields whatever it yields.
    #[must_use]
    pub fn value_at(
        self,
        elapsed_days: i64,
        start_value: Decimal,
        end_value: Decimal,
        total_days: i64,
    ) -> Decimal {
        debug_assert!(total_days > 0, "curve needs a positive life span");
        debug_assert!(
            (0..=total_days).contains(&elapsed_days),
            "elapsed days outside the curve's life span"
        );

        let elapsed = Decimal::from(elapsed_days);
        let total = Decimal::from(total_days);

        match self {
            Self::Linear => start_value + (end_value - start_value) * elapsed / total,
            Self::Parabola => {
                // Vertex at end of life: value(0) = start, value(total) = end,
                // slope at total is zero.
                let a = (start_value - end_value) / (total * total);
                let b = -Decimal::TWO * a * total;
                a * elapsed * elapsed + b * elapsed + start_value
            }
        }
    }

    /// The lowercase name used in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Parabola => "parabola",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parabola" => Ok(Self::Parabola),
            "linear" => Ok(Self::Linear),
            other => Err(Error::config(format!(
                "unknown depreciation method {other:?}"
            ))),
        }
    }
}
