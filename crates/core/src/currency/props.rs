//! Property-based tests for rate sampling.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::{Decimal, RoundingStrategy};

use super::rates::{BASE_RATES, jitter_factor, sample_all, sample_rate};

fn bound(base: Decimal, factor: Decimal) -> Decimal {
    (base * factor).round_dp_with_strategy(4, RoundingStrategy::MidpointNearestEven)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The factor never leaves `[0.98, 1.02]`.
    #[test]
    fn prop_jitter_factor_within_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let factor = jitter_factor(&mut rng);
        prop_assert!(factor >= Decimal::new(98, 2));
        prop_assert!(factor <= Decimal::new(102, 2));
    }

    /// Every sampled rate stays within two percent of its base, after rounding.
    #[test]
    fn prop_sampled_rate_within_two_percent(
        seed in any::<u64>(),
        index in 0usize..BASE_RATES.len()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (code, base) = BASE_RATES[index];
        let rate = sample_rate(code, &mut rng).unwrap().rate;

        prop_assert!(rate >= bound(base, Decimal::new(98, 2)));
        prop_assert!(rate <= bound(base, Decimal::new(102, 2)));
        prop_assert!(rate.scale() <= 4);
    }

    /// Listing always returns every code.
    #[test]
    fn prop_sample_all_is_complete(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(sample_all(&mut rng).len(), BASE_RATES.len());
    }
}
