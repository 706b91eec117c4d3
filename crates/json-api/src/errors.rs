//! API error responses.
//!
//! Every failure reaches the client as `{"error": "<message>"}`. Messages
//! come from the catalog so the apps can show them as-is.

use salvo::{
    Scribe,
    http::StatusCode,
    oapi::{self, EndpointOutRegister, ToSchema},
    prelude::{Json, Response},
};
use serde::{Deserialize, Serialize};

/// Error body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable reason
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub(crate) fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            error: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut oapi::Components, operation: &mut oapi::Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Rejected request"),
            (StatusCode::UNAUTHORIZED, "Missing, invalid or expired token"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    oapi::Content::new(ErrorBody::to_schema(components)),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[handler]
    async fn rejects() -> Result<&'static str, ApiError> {
        Err(ApiError::bad_request("Invalid order"))
    }

    #[tokio::test]
    async fn errors_render_as_json_error_body() -> TestResult {
        let service = Service::new(Router::with_path("rejects").get(rejects));

        let mut res = TestClient::get("http://example.com/rejects")
            .send(&service)
            .await;

        let body: ErrorBody = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert_eq!(body.error, "Invalid order");

        Ok(())
    }
}
