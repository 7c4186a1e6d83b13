//! Plugin configuration.
//!
//! Configuration arrives as an optional JSON document naming the asset
//! account to scan, the expense account to book against, and the curve
//! shape. Parsing is strict about structure (malformed JSON and unknown
//! method names are hard errors) but forgiving about account values:
//! a syntactically invalid account falls back to the built-in default.

use serde::{Deserialize, Serialize};

use crate::curve::Method;
use crate::error::Error;

/// Default account holding depreciable fixed-asset lots.
pub const DEFAULT_ASSETS_ACCOUNT: &str = "Assets:Wealth:Fixed-Assets";

/// Default account the depreciation expense is booked to.
pub const DEFAULT_EXPENSES_ACCOUNT: &str = "Expenses:Property-Expenses:Depreciation";

/// Settings for one depreciation pass.
///
/// Every field is individually optional in the JSON document; missing
/// fields take the defaults above. Unrecognized keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Account whose postings are scanned for depreciable lots.
    pub assets: String,
    /// Account the recognized expense is posted to.
    pub expenses: String,
    /// Curve shape used for every schedule.
    pub method: Method,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS_ACCOUNT.to_string(),
            expenses: DEFAULT_EXPENSES_ACCOUNT.to_string(),
            method: Method::default(),
        }
    }
}

impl Config {
    /// Parse a configuration document.
    ///
    /// Blank input means "use the defaults". Malformed JSON and unknown
    /// method names fail with [`Error::Config`]. Account names are
    /// resolved before returning, so callers always see valid accounts.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(text).map_err(Error::config)?;
        Ok(config.resolve())
    }

    /// Replace syntactically invalid account names with the defaults.
    ///
    /// A typo'd account is recovered, not rejected: the pass still runs
    /// against the default accounts rather than silently matching nothing
    /// or failing outright.
    #[must_use]
    pub fn resolve(mut self) -> Self {
        if !depcast_core::account::is_valid(&self.assets) {
            self.assets = DEFAULT_ASSETS_ACCOUNT.to_string();
        }
        if !depcast_core::account::is_valid(&self.expenses) {
            self.expenses = DEFAULT_EXPENSES_ACCOUNT.to_string();
        }
        self
    }
}
