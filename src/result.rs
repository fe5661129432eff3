use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// Which step of an action produced the failure. Not part of the envelope,
/// only used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthenticated,
    Forbidden,
    Backend,
    Transport,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Backend | ErrorKind::Transport => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionError {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub message: String,
}

impl ActionError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ActionError { kind, message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthenticated, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Backend, message)
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    pub fn into_envelope(self) -> ActionResult {
        ActionResult::Failure(self)
    }
}

/// Outcome of every action. Serializes to the envelope the frontend expects:
/// `{"isSuccess":true,"message":..,"data":..}` or
/// `{"isSuccess":false,"error":{"message":..}}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult<T = ()> {
    Success { message: String, data: Option<T> },
    Failure(ActionError),
}

impl<T> ActionResult<T> {
    pub fn success(message: impl Into<String>) -> Self {
        ActionResult::Success { message: message.into(), data: None }
    }

    pub fn with_data(message: impl Into<String>, data: Option<T>) -> Self {
        ActionResult::Success { message: message.into(), data }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success { .. })
    }

    /// Success message, or the error message on failure.
    pub fn message(&self) -> &str {
        match self {
            ActionResult::Success { message, .. } => message,
            ActionResult::Failure(e) => &e.message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ActionResult::Success { data, .. } => data.as_ref(),
            ActionResult::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ActionError> {
        match self {
            ActionResult::Success { .. } => None,
            ActionResult::Failure(e) => Some(e),
        }
    }
}

impl<T> From<ActionError> for ActionResult<T> {
    fn from(e: ActionError) -> Self {
        ActionResult::Failure(e)
    }
}

impl<T: Serialize> Serialize for ActionResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ActionResult::Success { message, data } => {
                let mut s = serializer.serialize_struct("ActionResult", 3)?;
                s.serialize_field("isSuccess", &true)?;
                s.serialize_field("message", message)?;
                s.serialize_field("data", data)?;
                s.end()
            }
            ActionResult::Failure(error) => {
                let mut s = serializer.serialize_struct("ActionResult", 2)?;
                s.serialize_field("isSuccess", &false)?;
                s.serialize_field("error", error)?;
                s.end()
            }
        }
    }
}

impl<T: Serialize> ActionResult<T> {
    pub fn into_response(self) -> HttpResponse {
        let status = match &self {
            ActionResult::Success { .. } => StatusCode::OK,
            ActionResult::Failure(e) => e.kind.status(),
        };
        HttpResponse::build(status).json(self)
    }
}
