//! HTTP client for the auth endpoints.
//!
//! `dispatch` is blocking and meant to run on a worker thread spawned by
//! the application state; it drives an async reqwest client through a
//! dedicated tokio runtime, the same shape the rest of the app uses for
//! network calls off the UI thread.

use reqwest::{Client, StatusCode};
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::{AuthError, AuthResponse, ErrorBody};

use super::payload::{AuthRequest, RequestBody};
use super::FormMode;

/// Send one prepared auth request and interpret the response.
pub fn dispatch(config: &Config, request: AuthRequest) -> Result<AuthResponse, AuthError> {
    let rt = Runtime::new().map_err(|e| AuthError::unexpected(format!("runtime: {e}")))?;
    rt.block_on(send(config, request))
}

async fn send(config: &Config, request: AuthRequest) -> Result<AuthResponse, AuthError> {
    let client = Client::new();
    let url = config.api_url(request.endpoint());
    let mode = request.mode();

    tracing::debug!(%url, "dispatching auth request");

    let response = match request.into_body() {
        RequestBody::Login(payload) => client.post(&url).json(&payload).send().await,
        RequestBody::Register(payload) => {
            client.post(&url).multipart(payload.into_multipart()).send().await
        }
    }
    .map_err(|e| AuthError::unexpected(format!("network: {e}")))?;

    let status = response.status();
    if status.is_success() {
        return response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::unexpected(format!("malformed response: {e}")));
    }

    let msg = response
        .json::<ErrorBody>()
        .await
        .map(|body| body.msg)
        .unwrap_or_default();
    Err(classify_failure(mode, status, msg))
}

/// Map an error status to the taxonomy: 400 on login and 500 on register
/// carry the server message verbatim; anything else is unclassified.
fn classify_failure(mode: FormMode, status: StatusCode, msg: String) -> AuthError {
    match (mode, status) {
        (FormMode::Login, StatusCode::BAD_REQUEST) => AuthError::rejected(msg),
        (FormMode::Register, StatusCode::INTERNAL_SERVER_ERROR) => {
            AuthError::registration_failed(msg)
        }
        (_, status) => AuthError::unexpected(format!("unexpected status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_400_maps_to_rejected() {
        let error = classify_failure(
            FormMode::Login,
            StatusCode::BAD_REQUEST,
            "bad credentials".to_string(),
        );
        assert_eq!(error, AuthError::rejected("bad credentials"));
    }

    #[test]
    fn test_register_500_maps_to_registration_failed() {
        let error = classify_failure(
            FormMode::Register,
            StatusCode::INTERNAL_SERVER_ERROR,
            "email taken".to_string(),
        );
        assert_eq!(error, AuthError::registration_failed("email taken"));
    }

    #[test]
    fn test_other_statuses_are_unclassified() {
        for (mode, status) in [
            (FormMode::Login, StatusCode::INTERNAL_SERVER_ERROR),
            (FormMode::Register, StatusCode::BAD_REQUEST),
            (FormMode::Login, StatusCode::SERVICE_UNAVAILABLE),
        ] {
            let error = classify_failure(mode, status, "ignored".to_string());
            assert!(matches!(error, AuthError::Unexpected { .. }));
        }
    }
}
