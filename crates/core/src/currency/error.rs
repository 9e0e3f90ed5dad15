//! Currency errors.

use thiserror::Error;
use webadmin_shared::AppError;

/// Currency lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CurrencyError {
    /// Code not present in the base rate table.
    #[error("Currency '{0}' not found")]
    UnknownCurrency(String),
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        Self::NotFound(err.to_string())
    }
}
