//! Property-based tests for the depreciation engine.
//!
//! These verify the engine's invariants over arbitrary lots: schedules
//! telescope exactly, every synthetic entry balances, and lot identity
//! chains across the whole forecast.
//!
//! Run with: cargo test -p depcast --test `property_tests`

use chrono::{Months, NaiveDate};
use depcast::{build_schedule, synthesize, AutoDepreciation, Method};
use depcast_core::{Amount, Cost, Directive, MetaValue, Posting, Transaction};
use proptest::prelude::*;
use rust_decimal::Decimal;

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_method() -> impl Strategy<Value = Method> {
    prop_oneof![Just(Method::Parabola), Just(Method::Linear)]
}

/// (start, end) value pair in cents with `end <= start`.
fn arb_value_pair() -> impl Strategy<Value = (Decimal, Decimal)> {
    (100i64..10_000_000)
        .prop_flat_map(|start| (Just(start), 0..=start))
        .prop_map(|(start, end)| (Decimal::new(start, 2), Decimal::new(end, 2)))
}

fn arb_life_months() -> impl Strategy<Value = u32> {
    1u32..=60
}

/// Any calendar day, month-end days included: the 29th through 31st are
/// where checkpoint clamping actually happens.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2015i32..2030, 1u32..13, 1u32..32)
        .prop_filter_map("invalid calendar day", |(y, m, d)| {
            NaiveDate::from_ymd_opt(y, m, d)
        })
}

fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1000).prop_map(Decimal::from)
}

fn arb_label() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z]{1,8}")
}

/// A purchase transaction holding one lot at cost, returned with the lot
/// posting for direct synthesis.
fn lot_fixture(
    qty: Decimal,
    cost_number: Decimal,
    acquired: NaiveDate,
    label: Option<String>,
) -> (Transaction, Posting) {
    let mut cost = Cost::new(cost_number, "CNY").with_date(acquired);
    if let Some(label) = label {
        cost = cost.with_label(label);
    }
    let posting =
        Posting::new("Assets:Wealth:Fixed-Assets", Amount::new(qty, "GEAR")).with_cost(cost);
    let balancing = Amount::new(-(qty * cost_number), "CNY");
    let entry = Transaction::new(acquired, "Test")
        .with_posting(posting.clone())
        .with_posting(Posting::new("Assets:Bank", balancing));
    (entry, posting)
}

/// Like [`lot_fixture`], with the depreciation directive attached so the
/// driver picks the lot up.
fn directive_fixture(
    qty: Decimal,
    cost_number: Decimal,
    residual: Decimal,
    acquired: NaiveDate,
    life: u32,
) -> Transaction {
    let (mut entry, _) = lot_fixture(qty, cost_number, acquired, None);
    let meta = &mut entry.postings[0].meta;
    meta.insert(
        "useful_life".to_string(),
        MetaValue::String(format!("{life}m")),
    );
    meta.insert("residual_value".to_string(), MetaValue::Number(residual));
    entry
}

// ============================================================================
// Schedule properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// One checkpoint per month of useful life, each exactly k calendar
    /// months after acquisition.
    #[test]
    fn prop_one_checkpoint_per_month(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        prop_assert_eq!(schedule.len(), life as usize);
        for (k, point) in schedule.iter().enumerate() {
            prop_assert_eq!(point.date, acquired + Months::new(k as u32 + 1));
        }
    }

    /// Checkpoint dates strictly increase even through clamped month ends.
    #[test]
    fn prop_checkpoint_dates_strictly_increase(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        for pair in schedule.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    /// The deltas sum to exactly `start - final value`: rounding never
    /// leaks a cent across the chain.
    #[test]
    fn prop_deltas_telescope_exactly(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        let total: Decimal = schedule.iter().map(|p| p.depreciation).sum();
        let last = schedule.last().unwrap();
        prop_assert_eq!(total, start - last.value);
    }

    /// The curve is anchored at the residual: the last checkpoint lands on
    /// `end` exactly at cent precision.
    #[test]
    fn prop_final_value_is_the_residual(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        prop_assert_eq!(schedule.last().unwrap().value, end);
    }

    /// With `end <= start` the rounded values never increase month over
    /// month, so every depreciation delta is non-negative.
    #[test]
    fn prop_values_never_increase(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        let mut previous = start;
        for point in &schedule {
            prop_assert!(point.value <= previous);
            prop_assert!(point.depreciation >= Decimal::ZERO);
            previous = point.value;
        }
    }

    /// A residual equal to the cost keeps the value flat for the whole
    /// life.
    #[test]
    fn prop_flat_curve_when_residual_equals_cost(
        start_cents in 100i64..10_000_000,
        acquired in arb_date(),
        life in arb_life_months(),
        method in arb_method(),
    ) {
        let start = Decimal::new(start_cents, 2);
        let schedule = build_schedule(start, start, acquired, life, method).unwrap();
        for point in &schedule {
            prop_assert_eq!(point.value, start);
            prop_assert_eq!(point.depreciation, Decimal::ZERO);
        }
    }
}

// ============================================================================
// Synthesizer properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every synthetic entry balances: the expense amount is exactly the
    /// weight lost between the disposed and re-booked lot.
    #[test]
    fn prop_every_synthetic_entry_balances(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in 1u32..=36,
        method in arb_method(),
        qty in arb_quantity(),
        label in arb_label(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        let (entry, posting) = lot_fixture(qty, start, acquired, label);
        let chain = synthesize(&entry, &posting, &schedule, "Expenses:Depreciation").unwrap();

        prop_assert_eq!(chain.len(), life as usize);
        for synthetic in &chain {
            prop_assert!(synthetic.is_balanced(), "unbalanced: {}", synthetic);
        }
    }

    /// Each dispose leg reproduces the previous re-booked lot exactly, and
    /// the first one reproduces the original lot.
    #[test]
    fn prop_lot_identity_chains(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in 1u32..=36,
        method in arb_method(),
        qty in arb_quantity(),
        label in arb_label(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        let (entry, posting) = lot_fixture(qty, start, acquired, label);
        let chain = synthesize(&entry, &posting, &schedule, "Expenses:Depreciation").unwrap();

        let first = chain[0].postings[0].cost.as_ref().unwrap();
        prop_assert_eq!(Some(first), posting.cost.as_ref());

        for pair in chain.windows(2) {
            let rebooked = pair[0].postings[1].cost.as_ref().unwrap();
            let disposed = pair[1].postings[0].cost.as_ref().unwrap();
            prop_assert_eq!(disposed, rebooked);
        }
    }

    /// Dispose and re-book move the same quantity in opposite directions,
    /// and each entry carries its own checkpoint date.
    #[test]
    fn prop_quantities_and_dates_line_up(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in 1u32..=36,
        method in arb_method(),
        qty in arb_quantity(),
        label in arb_label(),
    ) {
        let schedule = build_schedule(start, end, acquired, life, method).unwrap();
        let (entry, posting) = lot_fixture(qty, start, acquired, label);
        let chain = synthesize(&entry, &posting, &schedule, "Expenses:Depreciation").unwrap();

        for (point, synthetic) in schedule.iter().zip(&chain) {
            prop_assert_eq!(synthetic.date, point.date);
            prop_assert_eq!(synthetic.postings[0].units.number, -qty);
            prop_assert_eq!(synthetic.postings[1].units.number, qty);
            prop_assert_eq!(
                synthetic.postings[2].units.number,
                qty * point.depreciation
            );
        }
    }
}

// ============================================================================
// Driver properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The pass is purely additive: originals survive unmutated and the
    /// synthetic count equals the months of useful life.
    #[test]
    fn prop_process_is_purely_additive(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in 1u32..=24,
        qty in arb_quantity(),
    ) {
        let input = vec![Directive::Transaction(directive_fixture(
            qty, start, end, acquired, life,
        ))];
        let output = AutoDepreciation::default().process(input.clone()).unwrap();

        prop_assert_eq!(output.directives.len(), input.len() + life as usize);
        for directive in &input {
            prop_assert!(output.directives.contains(directive));
        }
        prop_assert!(output.errors.is_empty());
    }

    /// Output order is canonical: non-decreasing (date, type) keys.
    #[test]
    fn prop_process_output_is_sorted(
        (start, end) in arb_value_pair(),
        acquired in arb_date(),
        life in 1u32..=24,
        qty in arb_quantity(),
    ) {
        let input = vec![Directive::Transaction(directive_fixture(
            qty, start, end, acquired, life,
        ))];
        let output = AutoDepreciation::default().process(input).unwrap();

        for pair in output.directives.windows(2) {
            let key_a = (pair[0].date(), pair[0].priority());
            let key_b = (pair[1].date(), pair[1].priority());
            prop_assert!(key_a <= key_b);
        }
    }
}

// ============================================================================
// Fixture sanity
// ============================================================================

#[test]
fn fixture_purchase_balances() {
    // The generated purchase must pass the same balance rule the synthetic
    // entries are held to.
    let (entry, _) = lot_fixture(
        Decimal::from(3),
        Decimal::new(99_995, 2),
        NaiveDate::from_ymd_opt(2020, 3, 31).unwrap(),
        Some("nikon".to_string()),
    );
    assert!(entry.is_balanced());
}
