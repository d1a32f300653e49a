use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::pages::{render, ErrorPage};
use crate::api::ApiError;

/// Status a page answers with when the events API call behind it failed
pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::Status { status, .. } if status.is_client_error() => *status,
        ApiError::InvalidUrl { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// A failed page render, shown to the user as an error page
pub struct PageError {
    status: StatusCode,
    page: ErrorPage,
}

impl PageError {
    pub fn from_api(locale: &str, err: &ApiError) -> Self {
        Self {
            status: status_for(err),
            page: ErrorPage::new(locale, err.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        render(self.status, &self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(status_for(&err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn client_errors_pass_through() {
        let err = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "title missing");
        assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn upstream_failures_are_bad_gateway() {
        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(status_for(&err), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&ApiError::Decode("expected value".to_string())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn misconfiguration_is_internal() {
        let err = ApiError::InvalidUrl {
            url: "/api/events".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(status_for(&err), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(PageError::from_api("en", &err).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
