//! Property tests for scoring and rating invariants.
//!
//! 1. Points never increase with slower reactions, never decrease with longer combos
//! 2. Numerical rating stays in [0, 100]
//! 3. Tier is monotone: faster AND higher-scoring never rates worse
//! 4. Coin/star conversions are floor divisions

use proptest::prelude::*;
use stroop_core::{
    calculate_coins, calculate_points, calculate_stars, numerical_rating, performance_rating,
};

fn arb_reaction() -> impl Strategy<Value = u32> {
    0u32..5000
}

fn arb_combo() -> impl Strategy<Value = u32> {
    0u32..100
}

fn arb_difficulty() -> impl Strategy<Value = u32> {
    1u32..=5
}

proptest! {
    #[test]
    fn slower_never_scores_more(
        rt in arb_reaction(),
        extra in 0u32..3000,
        combo in arb_combo(),
        difficulty in arb_difficulty(),
    ) {
        let fast = calculate_points(rt, combo, difficulty);
        let slow = calculate_points(rt + extra, combo, difficulty);
        prop_assert!(slow <= fast, "rt={rt} extra={extra}: {slow} > {fast}");
    }

    #[test]
    fn longer_combo_never_scores_less(
        rt in arb_reaction(),
        combo in arb_combo(),
        extra in 0u32..20,
        difficulty in arb_difficulty(),
    ) {
        let short = calculate_points(rt, combo, difficulty);
        let long = calculate_points(rt, combo + extra, difficulty);
        prop_assert!(long >= short);
    }

    #[test]
    fn correct_answers_score_at_least_base(
        rt in arb_reaction(),
        combo in arb_combo(),
        difficulty in arb_difficulty(),
    ) {
        prop_assert!(calculate_points(rt, combo, difficulty) >= 10);
    }

    #[test]
    fn numerical_rating_is_bounded(
        avg in -1000.0..10_000.0_f64,
        score in 0u32..500,
        combo in 0u32..500,
    ) {
        let r = numerical_rating(avg, score, combo);
        prop_assert!((0.0..=100.0).contains(&r), "rating {r} out of range");
    }

    #[test]
    fn tier_is_monotone(
        avg in 100.0..2000.0_f64,
        faster_by in 0.0..500.0_f64,
        score in 0u32..80,
        more in 0u32..20,
    ) {
        let base = performance_rating(avg, score);
        let better = performance_rating(avg - faster_by, score + more);
        prop_assert!(better >= base, "{better:?} < {base:?}");
    }

    #[test]
    fn coins_and_stars_are_floor_division(points in 0u32..1_000_000, correct in 0u32..10_000) {
        let coins = calculate_coins(points);
        prop_assert!(coins * 100 <= points && points < (coins + 1) * 100);
        let stars = calculate_stars(correct);
        prop_assert!(stars * 10 <= correct && correct < (stars + 1) * 10);
    }
}
