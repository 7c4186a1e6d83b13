//! Synthetic depreciation entries.
//!
//! Each schedule point becomes one three-posting transaction: dispose the
//! current lot, re-book it at the checkpoint's present value, and recognize
//! the value lost as an expense. The disposal leg reproduces the previous
//! entry's re-booked lot exactly (cost, date, label), so the chain of
//! entries walks the lot forward one month at a time without ever leaving
//! an unmatched position behind.

use depcast_core::{Amount, Metadata, Posting, Transaction};

use crate::error::Error;
use crate::schedule::{SchedulePoint, RESIDUAL_VALUE_KEY, USEFUL_LIFE_KEY};

/// Copy posting metadata minus the depreciation directive keys.
///
/// The directive is consumed at schedule-build time; everything else the
/// user wrote on the posting rides along onto the derived postings.
fn strip_directive_meta(meta: &Metadata) -> Metadata {
    let mut stripped = meta.clone();
    stripped.remove(USEFUL_LIFE_KEY);
    stripped.remove(RESIDUAL_VALUE_KEY);
    stripped
}

/// Narration for a synthetic entry, derived from the original narration
/// and the lot label.
fn derive_narration(original: &str, label: Option<&str>) -> String {
    match (original.is_empty(), label) {
        (false, Some(label)) => format!("{original}-auto_depreciation:{label}"),
        (false, None) => format!("{original}-auto_depreciation"),
        (true, Some(label)) => format!("auto_depreciation:{label}"),
        (true, None) => "auto_depreciation".to_string(),
    }
}

/// Turn one lot's schedule into its chain of synthetic transactions.
///
/// Every emitted transaction is dated at its schedule point and inherits
/// the original entry's flag, payee, tags, links and metadata; only date,
/// narration and postings differ. The three postings always cancel in the
/// cost currency: the expense amount is defined as exactly the value drop
/// between the disposed and re-booked lot.
///
/// Fails with [`Error::MissingCost`] when the posting carries no cost
/// basis, since there is no start value to depreciate from.
pub fn synthesize(
    entry: &Transaction,
    posting: &Posting,
    schedule: &[SchedulePoint],
    expenses_account: &str,
) -> Result<Vec<Transaction>, Error> {
    let Some(original_cost) = posting.cost.as_ref() else {
        return Err(Error::MissingCost {
            account: posting.account.clone(),
        });
    };

    let narration = derive_narration(&entry.narration, original_cost.label.as_deref());
    let stripped_meta = strip_directive_meta(&posting.meta);

    let mut entries = Vec::with_capacity(schedule.len());
    let mut current_cost = original_cost.clone();

    for point in schedule {
        // Dispose the lot exactly as currently booked.
        let dispose = Posting {
            account: posting.account.clone(),
            units: -&posting.units,
            cost: Some(current_cost.clone()),
            flag: posting.flag,
            meta: stripped_meta.clone(),
        };

        // Re-book it at the checkpoint's present value and date.
        let next_cost = current_cost.reprice(point.value, point.date);
        let reacquire = Posting {
            account: posting.account.clone(),
            units: posting.units.clone(),
            cost: Some(next_cost.clone()),
            flag: posting.flag,
            meta: stripped_meta.clone(),
        };

        // Recognize the value drop, scaled by the lot quantity, in the
        // cost currency.
        let expense = Posting {
            account: expenses_account.to_string(),
            units: Amount::new(
                posting.units.number * point.depreciation,
                current_cost.currency.clone(),
            ),
            cost: None,
            flag: posting.flag,
            meta: stripped_meta.clone(),
        };

        let synthetic = Transaction {
            date: point.date,
            flag: entry.flag,
            payee: entry.payee.clone(),
            narration: narration.clone(),
            tags: entry.tags.clone(),
            links: entry.links.clone(),
            meta: entry.meta.clone(),
            postings: vec![dispose, reacquire, expense],
        };
        debug_assert!(
            synthetic.is_balanced(),
            "synthetic depreciation entry must balance"
        );

        entries.push(synthetic);
        current_cost = next_cost;
    }

    Ok(entries)
}
