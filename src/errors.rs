use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::result::ActionError;

#[derive(Debug)]
pub enum AppError {
    Http(reqwest::Error),
    Json(serde_json::Error),
    Token(jsonwebtoken::errors::Error),
    Session(String),
    Config(String),
    Csrf,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(e) => write!(f, "HTTP error: {e}"),
            AppError::Json(e) => write!(f, "JSON error: {e}"),
            AppError::Token(e) => write!(f, "Token error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Config(e) => write!(f, "Config error: {e}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Csrf => HttpResponse::Forbidden()
                .json(ActionError::forbidden(self.to_string()).into_envelope()),
            AppError::Token(_) => HttpResponse::Unauthorized()
                .json(ActionError::unauthenticated(self.to_string()).into_envelope()),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        AppError::Token(e)
    }
}

impl From<actix_session::SessionInsertError> for AppError {
    fn from(e: actix_session::SessionInsertError) -> Self {
        AppError::Session(e.to_string())
    }
}

impl From<actix_session::SessionGetError> for AppError {
    fn from(e: actix_session::SessionGetError) -> Self {
        AppError::Session(e.to_string())
    }
}
