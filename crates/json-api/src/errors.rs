//! API Errors

use salvo::{
    handler,
    http::{Method, ResBody, StatusCode},
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Request, Response},
    writing::Scribe,
};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::error;

use crate::envelope::ErrorEnvelope;

pub(crate) const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub(crate) const NOT_FOUND: &str = "NOT_FOUND";
pub(crate) const METHOD_NOT_ALLOWED: &str = "METHOD_NOT_ALLOWED";
pub(crate) const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

/// An error rendered as the failure envelope.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code}: {message}")]
pub(crate) struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: VALIDATION_ERROR,
            message: message.into(),
            details: None,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: NOT_FOUND,
            message: message.into(),
            details: None,
        }
    }

    pub(crate) fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: INTERNAL_SERVER_ERROR,
            message: "Internal server error".to_string(),
            details: None,
        }
    }

    #[must_use]
    pub(crate) fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Describe a response that reached the catcher without a body.
    fn from_status(status: StatusCode, brief: Option<String>, method: &Method, path: &str) -> Self {
        let brief = brief.filter(|brief| !brief.trim().is_empty());

        match status {
            StatusCode::NOT_FOUND => {
                Self::not_found(format!("Route {method} {path} not found")).with_details(json!({
                    "method": method.as_str(),
                    "path": path,
                }))
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::validation(brief.unwrap_or_else(|| "Invalid request".to_string()))
            }
            StatusCode::METHOD_NOT_ALLOWED => Self {
                status,
                code: METHOD_NOT_ALLOWED,
                message: format!("Method {method} not allowed on {path}"),
                details: None,
            },
            _ => {
                error!(status = status.as_u16(), %method, path, "unhandled error response");

                Self {
                    status,
                    ..Self::internal()
                }
            }
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorEnvelope::new(
            self.code,
            self.message,
            self.details,
        )));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Validation error"),
            (StatusCode::NOT_FOUND, "Not found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorEnvelope::to_schema(components)),
            );
        }
    }
}

/// Catcher hoop that turns body-less error responses into failure envelopes.
#[handler]
pub(crate) async fn catch_error_status(
    req: &mut Request,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(status) = res.status_code else {
        return;
    };

    if !(status.is_client_error() || status.is_server_error()) {
        return;
    }

    if !matches!(res.body, ResBody::None | ResBody::Error(_)) {
        return;
    }

    let brief = match res.take_body() {
        ResBody::Error(status_error) => Some(status_error.brief),
        _ => None,
    };

    ApiError::from_status(status, brief, req.method(), req.uri().path()).render(res);

    ctrl.skip_rest();
}
