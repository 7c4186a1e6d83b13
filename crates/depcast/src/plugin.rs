//! The depreciation pass.
//!
//! Scans booked transactions for fixed-asset lots carrying a
//! `useful_life` directive, builds each lot's forecast schedule, and
//! splices the synthetic entries back into the directive stream in
//! canonical (date, type) order.

use depcast_core::{sort_directives, Directive, MetaValue, Transaction};

use crate::config::Config;
use crate::error::Error;
use crate::schedule::{build_schedule, parse_residual_value, parse_useful_life, USEFUL_LIFE_KEY};
use crate::synthesize::synthesize;

/// Result of one depreciation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOutput {
    /// All directives, input plus synthetic, re-sorted.
    pub directives: Vec<Directive>,
    /// Non-fatal diagnostics. This pass treats every failure as fatal,
    /// so the list is empty on success; it exists so the output shape
    /// matches hosts that collect warnings from a plugin chain.
    pub errors: Vec<Error>,
}

/// Forecasted depreciation of fixed-asset lots.
///
/// A lot qualifies when its posting books into the configured assets
/// account and carries `useful_life` metadata. Each qualifying lot
/// produces one synthetic transaction per month of useful life; the
/// input directives themselves are never modified.
#[derive(Debug, Clone, Default)]
pub struct AutoDepreciation {
    config: Config,
}

impl AutoDepreciation {
    /// Create a pass with the given (already resolved) configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this pass runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pass over a directive stream.
    ///
    /// Returns the input directives plus all synthetic depreciation
    /// entries, sorted by [`sort_directives`]. The first malformed
    /// directive aborts the whole pass with a typed error: a bad
    /// `useful_life` or `residual_value` is a data-entry mistake the
    /// user has to fix, not something to forecast around.
    pub fn process(&self, mut directives: Vec<Directive>) -> Result<PluginOutput, Error> {
        let mut synthetic: Vec<Transaction> = Vec::new();
        for directive in &directives {
            if let Directive::Transaction(entry) = directive {
                self.forecast(entry, &mut synthetic)?;
            }
        }
        tracing::debug!(
            "depreciation pass produced {} synthetic entries",
            synthetic.len()
        );

        directives.extend(synthetic.into_iter().map(Directive::Transaction));
        sort_directives(&mut directives);
        Ok(PluginOutput {
            directives,
            errors: Vec::new(),
        })
    }

    /// Forecast every qualifying lot of one transaction.
    fn forecast(&self, entry: &Transaction, out: &mut Vec<Transaction>) -> Result<(), Error> {
        for posting in &entry.postings {
            if posting.account != self.config.assets {
                continue;
            }
            let Some(life) = posting.meta.get(USEFUL_LIFE_KEY) else {
                continue;
            };
            let months = match life {
                MetaValue::String(text) => parse_useful_life(text)?,
                other => {
                    return Err(Error::UsefulLife {
                        value: other.to_string(),
                    })
                }
            };
            let residual = parse_residual_value(&posting.meta)?;
            let Some(cost) = posting.cost.as_ref() else {
                return Err(Error::MissingCost {
                    account: posting.account.clone(),
                });
            };

            // A booked cost normally carries its acquisition date; fall
            // back to the entry date when it does not.
            let acquired = cost.date.unwrap_or(entry.date);
            let schedule = build_schedule(
                cost.number,
                residual,
                acquired,
                months,
                self.config.method,
            )?;
            tracing::debug!(
                "{}: {} schedule points for lot acquired {}",
                posting.account,
                schedule.len(),
                acquired
            );
            out.extend(synthesize(entry, posting, &schedule, &self.config.expenses)?);
        }
        Ok(())
    }
}
