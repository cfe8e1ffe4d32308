//! JSON Response Envelopes

use std::fmt::Debug;

use jiff::Timestamp;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Successful response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct Envelope<T: ToSchema + Debug + 'static> {
    /// Always `true`
    pub success: bool,

    /// The response payload
    pub data: T,

    /// When the response was produced
    pub timestamp: String,
}

impl<T: ToSchema + Debug + 'static> Envelope<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: Timestamp::now().to_string(),
        }
    }
}

/// Failed response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,

    pub error: ErrorBody,

    /// When the response was produced
    pub timestamp: String,
}

/// Machine-readable error description
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Stable error code, e.g. `VALIDATION_ERROR`
    pub code: String,

    /// Human-readable message
    pub message: String,

    /// Extra context, such as the ids that could not be found
    #[salvo(schema(value_type = Option<Object>))]
    pub details: Option<Value>,
}

impl ErrorEnvelope {
    pub(crate) fn new(code: &str, message: String, details: Option<Value>) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                code: code.to_owned(),
                message,
                details,
            },
            timestamp: Timestamp::now().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn success_envelope_wraps_data() -> TestResult {
        let value = serde_json::to_value(Envelope::new("hello".to_string()))?;

        assert_eq!(value["success"], json!(true));
        assert_eq!(value["data"], json!("hello"));
        assert!(value["timestamp"].as_str().is_some_and(|ts| !ts.is_empty()));

        Ok(())
    }

    #[test]
    fn error_envelope_serialises_null_details() -> TestResult {
        let value = serde_json::to_value(ErrorEnvelope::new(
            "NOT_FOUND",
            "shopping item not found".to_string(),
            None,
        ))?;

        assert_eq!(value["success"], json!(false));
        assert_eq!(value["error"]["code"], json!("NOT_FOUND"));
        assert_eq!(value["error"]["message"], json!("shopping item not found"));
        assert_eq!(value["error"]["details"], Value::Null);

        Ok(())
    }
}
