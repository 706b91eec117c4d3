//! Error bodies for failures no handler rendered.
//!
//! Extractor rejections, unknown routes and wrong methods leave salvo's own
//! error page behind; this rewrites them into the catalog `{"error": ...}`
//! shape.

use panggilin_app::messages::ErrorMessages;
use salvo::{catcher::Catcher, prelude::*};
use tracing::debug;

use crate::errors::ApiError;

#[derive(Debug)]
struct ErrorCatcher {
    errors: ErrorMessages,
}

#[handler]
impl ErrorCatcher {
    async fn handle(&self, req: &Request, res: &mut Response, ctrl: &mut FlowCtrl) {
        let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

        let message = if status.is_server_error() {
            &self.errors.request_failed
        } else {
            &self.errors.invalid_request
        };

        debug!(
            status = status.as_u16(),
            path = req.uri().path(),
            "rewrote unhandled error response"
        );

        res.render(ApiError {
            status,
            message: message.clone(),
        });
        ctrl.skip_rest();
    }
}

/// Catcher answering with catalog messages.
pub(crate) fn error_catcher(errors: ErrorMessages) -> Catcher {
    Catcher::default().hoop(ErrorCatcher { errors })
}
