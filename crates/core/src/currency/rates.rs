//! Base rates and jitter.

use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::error::CurrencyError;

/// Base rates against USD, in table order.
pub const BASE_RATES: [(&str, Decimal); 10] = [
    ("USD", Decimal::from_parts(100, 0, 0, false, 2)),
    ("EUR", Decimal::from_parts(92, 0, 0, false, 2)),
    ("GBP", Decimal::from_parts(79, 0, 0, false, 2)),
    ("JPY", Decimal::from_parts(14950, 0, 0, false, 2)),
    ("CHF", Decimal::from_parts(88, 0, 0, false, 2)),
    ("CAD", Decimal::from_parts(136, 0, 0, false, 2)),
    ("AUD", Decimal::from_parts(153, 0, 0, false, 2)),
    ("CNY", Decimal::from_parts(724, 0, 0, false, 2)),
    ("INR", Decimal::from_parts(8312, 0, 0, false, 2)),
    ("BRL", Decimal::from_parts(497, 0, 0, false, 2)),
];

/// Decimal places of a published rate.
const RATE_SCALE: u32 = 4;

/// Jitter bounds in millionths: `[0.98, 1.02]`.
const JITTER_MIN: i64 = 980_000;
const JITTER_MAX: i64 = 1_020_000;
const JITTER_SCALE: u32 = 6;

/// A sampled rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyRate {
    /// Upper-case ISO code.
    pub name: String,
    /// Rate against USD, 4 decimal places.
    pub rate: Decimal,
}

/// Draws a market-noise factor in `[0.98, 1.02]`.
pub fn jitter_factor<R: Rng>(rng: &mut R) -> Decimal {
    Decimal::new(rng.random_range(JITTER_MIN..=JITTER_MAX), JITTER_SCALE)
}

/// Base rate for a code, compared case-insensitively.
#[must_use]
pub fn base_rate(code: &str) -> Option<Decimal> {
    BASE_RATES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(code))
        .map(|(_, rate)| *rate)
}

fn jittered<R: Rng>(base: Decimal, rng: &mut R) -> Decimal {
    (base * jitter_factor(rng))
        .round_dp_with_strategy(RATE_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Samples the rate for one code. The code is upper-cased before lookup.
///
/// # Errors
///
/// Returns [`CurrencyError::UnknownCurrency`] if the code is not in the table.
pub fn sample_rate<R: Rng>(code: &str, rng: &mut R) -> Result<CurrencyRate, CurrencyError> {
    let name = code.to_uppercase();
    let base = base_rate(&name).ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))?;
    Ok(CurrencyRate {
        rate: jittered(base, rng),
        name,
    })
}

/// Samples every code in table order, each with an independent factor.
pub fn sample_all<R: Rng>(rng: &mut R) -> Vec<CurrencyRate> {
    BASE_RATES
        .iter()
        .map(|(name, base)| CurrencyRate {
            name: (*name).to_string(),
            rate: jittered(*base, rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sample_all_returns_table_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let names: Vec<_> = sample_all(&mut rng).into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "CNY", "INR", "BRL"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(7);
        let rate = sample_rate("eur", &mut rng).unwrap();
        assert_eq!(rate.name, "EUR");
        assert!(rate.rate >= dec!(0.9016) && rate.rate <= dec!(0.9384));
    }

    #[test]
    fn test_unknown_currency() {
        let mut rng = StdRng::seed_from_u64(7);
        let err = sample_rate("xyz", &mut rng).unwrap_err();
        assert_eq!(err, CurrencyError::UnknownCurrency("xyz".into()));
        assert_eq!(err.to_string(), "Currency 'xyz' not found");
    }

    #[test]
    fn test_base_rates() {
        assert_eq!(base_rate("USD"), Some(dec!(1.00)));
        assert_eq!(base_rate("jpy"), Some(dec!(149.50)));
        assert_eq!(base_rate("INR"), Some(dec!(83.12)));
        assert_eq!(base_rate("XXX"), None);
    }

    #[test]
    fn test_rates_serialize_with_four_places() {
        let mut rng = StdRng::seed_from_u64(11);
        let rate = sample_rate("USD", &mut rng).unwrap();
        assert!(rate.rate.scale() <= 4);
    }
}
