//! Core ledger types for depcast
//!
//! This crate provides the fundamental types the depreciation engine
//! operates on:
//!
//! - [`Amount`] - A decimal number with a currency
//! - [`Cost`] - Acquisition cost of a lot, with date and label identity
//! - [`Posting`] - One leg of a transaction, optionally held at cost
//! - [`Directive`] - The directive types (Transaction, Balance, Open, ...)
//! - [`sort_directives`] - Canonical (date, type-priority) entry ordering
//!
//! # Example
//!
//! ```
//! use depcast_core::{Amount, Cost, Posting, Transaction};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let acquired = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
//!
//! // Two cameras at 600.00 CNY each, held as a labeled lot
//! let lot = Posting::new("Assets:Wealth:Fixed-Assets", Amount::new(dec!(2), "CAMERA"))
//!     .with_cost(Cost::new(dec!(600.00), "CNY").with_date(acquired).with_label("cam"));
//!
//! let txn = Transaction::new(acquired, "Camera purchase")
//!     .with_posting(lot)
//!     .with_posting(Posting::new("Assets:Bank", Amount::new(dec!(-1200.00), "CNY")));
//!
//! // Weights cancel: 2 × 600.00 CNY against -1200.00 CNY
//! assert!(txn.is_balanced());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod amount;
pub mod cost;
pub mod directive;
pub mod intern;

pub use amount::Amount;
pub use cost::Cost;
pub use directive::{
    sort_directives, Balance, Close, Commodity, Directive, DirectivePriority, MetaValue, Metadata,
    Open, Posting, Transaction,
};
pub use intern::InternedStr;

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
