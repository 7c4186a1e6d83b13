//! Cost basis of an asset lot.
//!
//! A [`Cost`] records what a position was acquired for: the per-unit cost,
//! its currency, the acquisition date, and an optional lot label. The
//! (cost, date, label) triple identifies a lot within an account, so a
//! disposal leg must reproduce all three exactly to match the lot it closes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::intern::InternedStr;
use crate::Amount;

/// The acquisition cost of a lot.
///
/// When you buy 2 CAMERA at 600.00 CNY on 2020-03-31, the cost is:
/// - number: 600.00
/// - currency: "CNY"
/// - date: Some(2020-03-31)
/// - label: None (or Some("cam-1") if labeled)
///
/// # Examples
///
/// ```
/// use depcast_core::Cost;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let cost = Cost::new(dec!(600.00), "CNY")
///     .with_date(NaiveDate::from_ymd_opt(2020, 3, 31).unwrap());
///
/// assert_eq!(cost.number, dec!(600.00));
/// assert_eq!(cost.currency, "CNY");
/// assert!(cost.date.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Cost per unit
    pub number: Decimal,
    /// Currency of the cost
    pub currency: InternedStr,
    /// Acquisition date (optional, for lot identification)
    pub date: Option<NaiveDate>,
    /// Lot label (optional, for explicit lot identification)
    pub label: Option<String>,
}

impl Cost {
    /// Create a new cost with the given number and currency.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<InternedStr>) -> Self {
        Self {
            number,
            currency: currency.into(),
            date: None,
            label: None,
        }
    }

    /// Add a date to this cost.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add a label to this cost.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Rebook this cost at a new per-unit value and date.
    ///
    /// Currency and label are preserved, so the repriced lot stays matchable
    /// against later disposals under the same label.
    #[must_use]
    pub fn reprice(&self, number: Decimal, date: NaiveDate) -> Self {
        Self {
            number,
            currency: self.currency.clone(),
            date: Some(date),
            label: self.label.clone(),
        }
    }

    /// Get the cost as an amount.
    #[must_use]
    pub fn as_amount(&self) -> Amount {
        Amount::new(self.number, self.currency.clone())
    }

    /// Calculate the total cost for a given number of units.
    #[must_use]
    pub fn total_cost(&self, units: Decimal) -> Amount {
        Amount::new(units * self.number, self.currency.clone())
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}", self.number, self.currency)?;
        if let Some(date) = self.date {
            write!(f, ", {date}")?;
        }
        if let Some(label) = &self.label {
            write!(f, ", \"{label}\"")?;
        }
        write!(f, "}}")
    }
}
