//! Error-to-response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};
use webadmin_core::currency::CurrencyError;
use webadmin_core::store::StoreError;
use webadmin_shared::AppError;

/// An error returned from a handler.
///
/// Renders as `{"error": CODE, "message": text}` with the status of the
/// wrapped [`AppError`].
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// A 400 for a malformed request parameter.
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }

    /// A 500 for a failure on the server side.
    pub fn internal(message: impl Into<String>) -> Self {
        Self(AppError::Internal(message.into()))
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl From<CurrencyError> for ApiError {
    fn from(err: CurrencyError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(error = %message, "Request failed");
        } else {
            warn!(code = self.0.error_code(), error = %message, "Request rejected");
        }

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(StoreError::not_found("Account", "ACC9"), StatusCode::NOT_FOUND, "NOT_FOUND")]
    #[case(StoreError::Conflict("Username already exists"), StatusCode::BAD_REQUEST, "CONFLICT")]
    #[case(
        StoreError::InvalidArgument("Transaction amount must be greater than zero".into()),
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR"
    )]
    #[tokio::test]
    async fn test_store_errors_render(
        #[case] err: StoreError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let message = err.to_string();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), status);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], code);
        assert_eq!(json["message"], message);
    }

    #[tokio::test]
    async fn test_unknown_currency_is_404() {
        let response = ApiError::from(CurrencyError::UnknownCurrency("xyz".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
