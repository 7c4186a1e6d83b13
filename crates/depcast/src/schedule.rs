//! Monthly depreciation schedules.
//!
//! The schedule builder samples a value curve at calendar-month checkpoints
//! and converts the sampled values into period-over-period depreciation
//! amounts. All rounding happens here, under one rule: checkpoint values
//! round to cents half-to-even, and each period's depreciation is the
//! difference of two already-rounded values, so the deltas telescope to
//! `start - final value` with no residual drift no matter how long the
//! chain runs.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depcast_core::{MetaValue, Metadata};

use crate::curve::Method;
use crate::error::Error;

/// Posting metadata key holding the useful-life duration.
pub const USEFUL_LIFE_KEY: &str = "useful_life";

/// Posting metadata key holding the optional residual value.
pub const RESIDUAL_VALUE_KEY: &str = "residual_value";

/// Checkpoint values are kept at this many fractional digits.
const CENT_PRECISION: u32 = 2;

/// One forecasted checkpoint of a depreciation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulePoint {
    /// Checkpoint date, the end of one elapsed calendar month.
    pub date: NaiveDate,
    /// Present value at this date, rounded to cents.
    pub value: Decimal,
    /// Value lost since the previous checkpoint (or since acquisition for
    /// the first point). Not independently rounded.
    pub depreciation: Decimal,
}

/// Build the monthly depreciation schedule for one lot.
///
/// Checkpoints fall at `acquisition_date + k` calendar months for
/// `k = 1..=life_months`, with the day-of-month clamped to the target
/// month's last valid day (acquiring on the 31st lands on the 30th or the
/// 28th/29th where needed). The curve runs over real elapsed days, so two
/// lives of equal month count can depreciate at different daily rates.
///
/// `life_months` of zero produces an empty schedule; callers that treat a
/// zero life as a data error reject it before calling (see
/// [`parse_useful_life`]). A life whose checkpoints would run past the
/// last representable calendar date fails with [`Error::LifeOutOfRange`].
pub fn build_schedule(
    start_value: Decimal,
    end_value: Decimal,
    acquisition_date: NaiveDate,
    life_months: u32,
    method: Method,
) -> Result<Vec<SchedulePoint>, Error> {
    let overflow = || Error::LifeOutOfRange {
        months: life_months,
        acquired: acquisition_date,
    };
    let checkpoints = (1..=life_months)
        .map(|k| {
            acquisition_date
                .checked_add_months(Months::new(k))
                .ok_or_else(overflow)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let Some(last) = checkpoints.last() else {
        return Ok(Vec::new());
    };
    let total_days = (*last - acquisition_date).num_days();

    let mut points = Vec::with_capacity(checkpoints.len());
    // The start value is exact as written in the ledger, so the first delta
    // subtracts from it unrounded.
    let mut previous_value = start_value;

    for date in checkpoints {
        let elapsed_days = (date - acquisition_date).num_days();
        let value = method
            .value_at(elapsed_days, start_value, end_value, total_days)
            .round_dp(CENT_PRECISION);
        let depreciation = previous_value - value;

        points.push(SchedulePoint {
            date,
            value,
            depreciation,
        });
        previous_value = value;
    }

    Ok(points)
}

/// Parse a `useful_life` metadata value into a number of months.
///
/// The accepted form is digits followed by a unit, `m` for months or `y`
/// for years (case-insensitive), with nothing else around it. Years
/// normalize to 12× months. A zero-length life is rejected: it cannot
/// produce a single checkpoint.
pub fn parse_useful_life(value: &str) -> Result<u32, Error> {
    let err = || Error::UsefulLife {
        value: value.to_string(),
    };

    let mut chars = value.chars();
    let unit = chars.next_back().ok_or_else(err)?;
    let digits = chars.as_str();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let months: u32 = digits.parse().map_err(|_| err())?;
    if months == 0 {
        return Err(err());
    }

    match unit {
        'm' | 'M' => Ok(months),
        'y' | 'Y' => months.checked_mul(12).ok_or_else(err),
        _ => Err(err()),
    }
}

/// Read the optional `residual_value` metadata from a posting.
///
/// A missing key means the asset depreciates to zero. A present value is
/// rounded to cents on the way in, so the schedule's final checkpoint
/// equals the stated residual exactly at ledger precision.
pub fn parse_residual_value(meta: &Metadata) -> Result<Decimal, Error> {
    match meta.get(RESIDUAL_VALUE_KEY) {
        None => Ok(Decimal::ZERO),
        Some(MetaValue::Number(number)) => Ok(number.round_dp(CENT_PRECISION)),
        Some(other) => Err(Error::ResidualValue {
            value: other.to_string(),
        }),
    }
}
