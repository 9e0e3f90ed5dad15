//! Simulated currency rate table.
//!
//! Every read draws a fresh market-noise factor in `[0.98, 1.02]` and applies
//! it to a fixed base rate, so consecutive reads differ.

pub mod error;
pub mod rates;

#[cfg(test)]
mod props;

pub use error::CurrencyError;
pub use rates::{BASE_RATES, CurrencyRate, base_rate, jitter_factor, sample_all, sample_rate};
