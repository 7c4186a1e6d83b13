//! Error types for the depreciation engine.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while building or applying depreciation schedules.
///
/// Everything here is a data or configuration mistake: the computation is
/// deterministic and pure, so no failure is transient and nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The `useful_life` metadata value does not parse.
    ///
    /// Accepted form is digits followed by `m` or `y` (case-insensitive)
    /// describing at least one month, e.g. `"12m"` or `"3y"`.
    #[error("invalid useful_life {value:?}: expected a positive integer followed by 'm' or 'y'")]
    UsefulLife {
        /// The metadata value as written.
        value: String,
    },

    /// The useful life runs past the last representable calendar date.
    ///
    /// A well-formed but enormous `useful_life` needs checkpoint dates
    /// beyond what the calendar type can hold.
    #[error("useful_life of {months} months from {acquired} runs past the supported date range")]
    LifeOutOfRange {
        /// The life in months.
        months: u32,
        /// The acquisition date the schedule starts from.
        acquired: NaiveDate,
    },

    /// The `residual_value` metadata is present but not a number.
    #[error("invalid residual_value {value:?}: expected a decimal number")]
    ResidualValue {
        /// The metadata value as written.
        value: String,
    },

    /// A posting carries depreciation metadata but no cost basis.
    ///
    /// Without a per-unit acquisition cost there is no start value to
    /// depreciate from.
    #[error("posting to {account} has useful_life metadata but no cost basis")]
    MissingCost {
        /// The account of the offending posting.
        account: String,
    },

    /// The configuration document could not be parsed or names an unknown
    /// depreciation method.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },
}

impl Error {
    /// Build a configuration error from any displayable reason.
    pub(crate) fn config(reason: impl std::fmt::Display) -> Self {
        Self::Config {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_useful_life() {
        let err = Error::UsefulLife {
            value: "12mm".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("useful_life"));
        assert!(msg.contains("12mm"));
    }

    #[test]
    fn test_display_life_out_of_range() {
        let err = Error::LifeOutOfRange {
            months: 3_146_400,
            acquired: NaiveDate::from_ymd_opt(2020, 3, 31).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3146400"));
        assert!(msg.contains("2020-03-31"));
    }

    #[test]
    fn test_display_missing_cost() {
        let err = Error::MissingCost {
            account: "Assets:Wealth:Fixed-Assets".to_string(),
        };
        assert!(err.to_string().contains("Assets:Wealth:Fixed-Assets"));
    }

    #[test]
    fn test_display_config() {
        let err = Error::config("unknown depreciation method \"cubic\"");
        assert!(err.to_string().contains("cubic"));
    }
}
