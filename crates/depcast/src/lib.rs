//! Forecasted fixed-asset depreciation for beancount-style ledgers.
//!
//! Given a purchase posting annotated with a `useful_life` duration (and an
//! optional `residual_value`), this crate forecasts the asset's present
//! value at each month-end of its useful life and emits one synthetic
//! transaction per checkpoint: dispose the current lot, re-book it at the
//! new present value, and recognize the difference as a depreciation
//! expense.
//!
//! # Pipeline
//!
//! - [`curve`]: pure value curves (parabola and linear) over elapsed days
//! - [`schedule`]: calendar-month sampling and the rounding contract
//! - [`synthesize`]: the three-posting entries, chained lot by lot
//! - [`plugin`]: the pass over a whole directive stream
//! - [`config`]: accounts and curve shape, with documented fallbacks
//!
//! Balance is preserved by construction: each entry's expense amount is
//! exactly the value drop between its disposed and re-booked lot, so the
//! three postings always cancel in the cost currency. Checkpoint values
//! are rounded once, to cents, and each period's depreciation is the
//! difference of two already-rounded values; the deltas therefore
//! telescope to `cost - final value` with no drift, however long the
//! chain runs.
//!
//! # Example
//!
//! ```
//! use depcast::{AutoDepreciation, Config};
//! use depcast_core::{Amount, Cost, Directive, MetaValue, Metadata, Posting, Transaction};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let acquired = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
//!
//! // One camera at 600.00 CNY, sliding to 200 CNY over three months.
//! let mut meta = Metadata::new();
//! meta.insert("useful_life".to_string(), MetaValue::String("3m".to_string()));
//! meta.insert("residual_value".to_string(), MetaValue::Number(dec!(200)));
//!
//! let lot = Posting::new("Assets:Wealth:Fixed-Assets", Amount::new(dec!(1), "CAMERA"))
//!     .with_cost(Cost::new(dec!(600.00), "CNY").with_date(acquired).with_label("cam"))
//!     .with_meta(meta);
//!
//! let purchase = Transaction::new(acquired, "Camera purchase")
//!     .with_posting(lot)
//!     .with_posting(Posting::new("Assets:Bank", Amount::new(dec!(-600.00), "CNY")));
//!
//! let pass = AutoDepreciation::new(Config::default());
//! let output = pass.process(vec![Directive::Transaction(purchase)])?;
//!
//! // The purchase plus one synthetic entry per month of useful life.
//! assert_eq!(output.directives.len(), 4);
//! # Ok::<(), depcast::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod curve;
pub mod error;
pub mod plugin;
pub mod schedule;
pub mod synthesize;

pub use config::{Config, DEFAULT_ASSETS_ACCOUNT, DEFAULT_EXPENSES_ACCOUNT};
pub use curve::Method;
pub use error::Error;
pub use plugin::{AutoDepreciation, PluginOutput};
pub use schedule::{
    build_schedule, parse_residual_value, parse_useful_life, SchedulePoint, RESIDUAL_VALUE_KEY,
    USEFUL_LIFE_KEY,
};
pub use synthesize::synthesize;
