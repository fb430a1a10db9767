//! The action-result envelope
//!
//! Every mutation action returns exactly this shape. The invariant
//! `success == true ⇔ error is None` holds for every constructor; the
//! action layer never lets a raw error escape to its caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// Error payload inside the envelope: a closed kind plus the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ActionError {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Uniform result envelope returned by every mutation action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ActionError>,
}

impl<T> ActionResult<T> {
    /// Successful action with a payload
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            error: None,
        }
    }

    /// Successful action with no payload (deletes, bulk writes)
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            error: None,
        }
    }

    /// Failed action from a typed error
    pub fn err(error: Error) -> Self {
        Self {
            success: false,
            message: None,
            data: None,
            error: Some(ActionError::from(&error)),
        }
    }

    /// Failed action: no resolvable identity
    pub fn auth_required() -> Self {
        Self::err(Error::AuthRequired)
    }

    /// Failed action: identity resolved but role insufficient
    pub fn forbidden(verb: &str, noun: &str) -> Self {
        Self::err(Error::forbidden(verb, noun))
    }

    /// The envelope invariant: success exactly when no error is carried.
    pub fn is_consistent(&self) -> bool {
        self.success == self.error.is_none()
    }

    /// HTTP status for this envelope (200 on success, kind-mapped otherwise)
    pub fn status_code(&self) -> StatusCode {
        match &self.error {
            None => StatusCode::OK,
            Some(e) => match e.kind {
                ErrorKind::AuthRequired => StatusCode::UNAUTHORIZED,
                ErrorKind::Forbidden => StatusCode::FORBIDDEN,
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl<T> From<crate::Result<(T, String)>> for ActionResult<T> {
    fn from(result: crate::Result<(T, String)>) -> Self {
        match result {
            Ok((data, message)) => Self::ok(data, message),
            Err(e) => Self::err(e),
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_has_no_error() {
        let result = ActionResult::ok(42, "done");
        assert!(result.success);
        assert_eq!(result.data, Some(42));
        assert_eq!(result.message.as_deref(), Some("done"));
        assert!(result.error.is_none());
        assert!(result.is_consistent());
    }

    #[test]
    fn test_ok_message_envelope() {
        let result: ActionResult<()> = ActionResult::ok_message("Event deleted successfully");
        assert!(result.success);
        assert!(result.data.is_none());
        assert_eq!(result.message.as_deref(), Some("Event deleted successfully"));
        assert!(result.is_consistent());
    }

    #[test]
    fn test_err_envelope_has_no_data() {
        let result: ActionResult<()> = ActionResult::err(Error::NotFound("Event".to_string()));
        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(result.message.is_none());
        let error = result.error.as_ref().unwrap();
        assert_eq!(error.kind, ErrorKind::NotFound);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_auth_required_envelope() {
        let result: ActionResult<()> = ActionResult::auth_required();
        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::AuthRequired);
        assert_eq!(error.message, "Authentication required");
    }

    #[test]
    fn test_forbidden_envelope_message() {
        let result: ActionResult<()> = ActionResult::forbidden("update", "resource");
        let error = result.error.unwrap();
        assert_eq!(error.kind, ErrorKind::Forbidden);
        assert_eq!(error.message, "Insufficient permissions to update resource");
    }

    #[test]
    fn test_status_codes_follow_kind() {
        assert_eq!(
            ActionResult::ok((), "ok").status_code(),
            StatusCode::OK
        );
        assert_eq!(
            ActionResult::<()>::auth_required().status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ActionResult::<()>::forbidden("create", "event").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ActionResult::<()>::err(Error::Conflict("dup".to_string())).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let result: ActionResult<()> = ActionResult::ok_message("done");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("error").is_none());
        assert!(json.get("data").is_none());

        let result: ActionResult<()> = ActionResult::auth_required();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "auth_required");
        assert!(json.get("message").is_none());
    }
}
