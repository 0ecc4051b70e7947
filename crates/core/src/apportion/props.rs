//! Property-based tests for apportionment.
//!
//! - Property 1: Percentage parts stay within bounds and are monotonic
//! - Property 2: Full rates are identities
//! - Property 3: Backing the base out of a taxed total recovers the base

use proptest::prelude::*;

use super::engine::{BPS_SCALE, PERCENT_SCALE, bps_base_part, bps_part, percent_part};

/// Strategy to generate non-negative amounts up to 10^15 minor units.
fn amount() -> impl Strategy<Value = i64> {
    0i64..=1_000_000_000_000_000
}

/// Strategy to generate amounts of either sign up to 10^15 minor units.
fn signed_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000_000_000i64..=1_000_000_000_000_000
}

/// Strategy to generate whole percentages (0% to 100%).
fn percent() -> impl Strategy<Value = i64> {
    0i64..=PERCENT_SCALE
}

/// Strategy to generate tax rates in basis points (0% to 1000%).
fn bps() -> impl Strategy<Value = i64> {
    0i64..=10 * BPS_SCALE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // =========================================================================
    // Property 1: Bounds and monotonicity
    // =========================================================================

    /// *For any* non-negative amount and percent in [0, 100], the part lies
    /// between zero and the amount.
    #[test]
    fn prop_percent_part_bounded(amount in amount(), percent in percent()) {
        let part = percent_part(amount, percent).unwrap();
        prop_assert!(part >= 0, "part {} is negative", part);
        prop_assert!(part <= amount, "part {} exceeds amount {}", part, amount);
    }

    /// *For any* amount, raising the percent never lowers the part.
    #[test]
    fn prop_percent_part_monotonic_in_percent(amount in amount(), percent in 0i64..PERCENT_SCALE) {
        let lower = percent_part(amount, percent).unwrap();
        let higher = percent_part(amount, percent + 1).unwrap();
        prop_assert!(lower <= higher);
    }

    /// *For any* percent, raising the amount never lowers the part.
    #[test]
    fn prop_percent_part_monotonic_in_amount(
        amount in amount(),
        delta in 0i64..1_000_000,
        percent in percent(),
    ) {
        let lower = percent_part(amount, percent).unwrap();
        let higher = percent_part(amount + delta, percent).unwrap();
        prop_assert!(lower <= higher);
    }

    /// *For any* amount, rounding is symmetric around zero.
    #[test]
    fn prop_bps_part_symmetric_for_negative_amounts(amount in amount(), bps in bps()) {
        prop_assert_eq!(bps_part(-amount, bps).unwrap(), -bps_part(amount, bps).unwrap());
    }

    // =========================================================================
    // Property 2: Identities
    // =========================================================================

    /// *For any* amount, 100% of it is the amount itself.
    #[test]
    fn prop_percent_part_full_is_identity(amount in signed_amount()) {
        prop_assert_eq!(percent_part(amount, PERCENT_SCALE).unwrap(), amount);
    }

    /// *For any* amount, 10000 bps of it is the amount itself.
    #[test]
    fn prop_bps_part_full_is_identity(amount in signed_amount()) {
        prop_assert_eq!(bps_part(amount, BPS_SCALE).unwrap(), amount);
    }

    /// *For any* amount, a zero rate yields zero.
    #[test]
    fn prop_zero_rate_is_zero(amount in signed_amount()) {
        prop_assert_eq!(percent_part(amount, 0).unwrap(), 0);
        prop_assert_eq!(bps_part(amount, 0).unwrap(), 0);
    }

    /// *For any* total, the base at a zero rate is the total.
    #[test]
    fn prop_base_part_zero_rate_is_identity(amount in signed_amount()) {
        prop_assert_eq!(bps_base_part(amount, 0).unwrap(), amount);
    }

    // =========================================================================
    // Property 3: Base recovery
    // =========================================================================

    /// *For any* base and rate, backing the base out of `base + tax` lands
    /// within one minor unit of the original base.
    #[test]
    fn prop_base_part_recovers_base(base in signed_amount(), bps in bps()) {
        let total = base + bps_part(base, bps).unwrap();
        let recovered = bps_base_part(total, bps).unwrap();
        prop_assert!(
            (recovered - base).abs() <= 1,
            "base {} recovered as {} (total {}, bps {})",
            base, recovered, total, bps
        );
    }

    /// *For any* operation and inputs, evaluating twice gives the same result.
    #[test]
    fn prop_operations_are_deterministic(amount in signed_amount(), bps in bps()) {
        prop_assert_eq!(bps_part(amount, bps), bps_part(amount, bps));
        prop_assert_eq!(bps_base_part(amount, bps), bps_base_part(amount, bps));
    }
}
