//! Simulated currency rate routes.

use axum::{Json, Router, extract::Path, routing::get};
use tracing::debug;
use webadmin_core::currency::{CurrencyRate, sample_all, sample_rate};

use crate::{AppState, error::ApiError};

/// Creates the currency routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/currency", get(list_rates))
        .route("/currency/{name}", get(get_rate))
}

/// GET `/currency` - Fresh samples for every code.
async fn list_rates() -> Json<Vec<CurrencyRate>> {
    debug!("Sampling all currency rates");
    Json(sample_all(&mut rand::rng()))
}

/// GET `/currency/{name}` - A fresh sample for one code.
async fn get_rate(Path(name): Path<String>) -> Result<Json<CurrencyRate>, ApiError> {
    Ok(Json(sample_rate(&name, &mut rand::rng())?))
}
