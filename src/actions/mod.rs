//! Server actions for slide groups and slides.
//!
//! Each action takes the explicit principal (`Option<&AuthSession>`) and
//! resolves to an `ActionResult`, whatever step fails. Writes run the
//! authorization gate and the schema before anything reaches the backend.

pub mod slide;
pub mod slide_group;

use serde::de::DeserializeOwned;

use crate::api::cache::CacheMode;
use crate::api::{ApiClient, Endpoint};
use crate::auth::token::TokenVerifier;
use crate::config::Config;
use crate::errors::AppError;
use crate::result::{ActionError, ActionResult};

/// Route whose cached reads are dropped after a slide group changes.
pub const SLIDES_ROUTE: &str = "/slides";

/// Everything an action needs besides the principal.
#[derive(Clone)]
pub struct ActionContext {
    pub api: ApiClient,
    pub tokens: TokenVerifier,
}

impl ActionContext {
    pub fn new(api_url: &str, auth_secret: &str) -> Result<Self, AppError> {
        Ok(ActionContext {
            api: ApiClient::new(api_url)?,
            tokens: TokenVerifier::new(auth_secret),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(&config.api_url, &config.auth_secret)
    }
}

/// Shared read path: a non-success status is reported as success without
/// data; only transport or decoding failures become a failure.
async fn fetch<T: DeserializeOwned>(
    ctx: &ActionContext,
    endpoint: &Endpoint,
    mode: CacheMode,
    message: &str,
) -> ActionResult<T> {
    match ctx.api.get::<T>(endpoint, mode).await {
        Ok(data) => ActionResult::with_data(message, data),
        Err(e) => {
            log::error!("GET {} failed: {e}", endpoint.path());
            ActionError::transport(failure_text(e)).into()
        }
    }
}

fn transport(e: AppError) -> ActionError {
    log::error!("Backend request failed: {e}");
    ActionError::transport(failure_text(e))
}

/// Text of the underlying error, without the `AppError` prefix and without
/// the backend URL.
fn failure_text(e: AppError) -> String {
    match e {
        AppError::Http(e) => e.without_url().to_string(),
        AppError::Json(e) => e.to_string(),
        other => other.to_string(),
    }
}
