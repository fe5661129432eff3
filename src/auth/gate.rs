//! Authorization checks shared by the write actions.
//!
//! Every check returns an `ActionError` instead of propagating a fault, so
//! the action can turn it straight into a failure envelope.

use crate::auth::session::{AuthSession, Role};
use crate::auth::token::TokenVerifier;
use crate::messages;
use crate::result::ActionError;

/// Resolve the principal; `missing_message` is reported when there is none.
pub fn principal<'a>(
    session: Option<&'a AuthSession>,
    missing_message: &str,
) -> Result<&'a AuthSession, ActionError> {
    session.ok_or_else(|| {
        log::warn!("Rejected action without a signed-in principal");
        ActionError::unauthenticated(missing_message)
    })
}

/// Group mutations are admin-only.
pub fn require_admin(auth: &AuthSession) -> Result<(), ActionError> {
    if auth.user.role == Role::Admin {
        return Ok(());
    }
    log::warn!(
        "User {} with role '{}' is not allowed to mutate slide groups",
        auth.user.id,
        auth.user.role.as_str()
    );
    Err(ActionError::forbidden(messages::NO_PERMISSION))
}

/// Slide edits are open to every role except plain `user`.
pub fn require_editor(auth: &AuthSession) -> Result<(), ActionError> {
    if auth.user.role != Role::User {
        return Ok(());
    }
    log::warn!("User {} with role 'user' is not allowed to edit slides", auth.user.id);
    Err(ActionError::forbidden(messages::LOGIN_REQUIRED))
}

/// The id asserted by the signed token must be the id the session claims.
pub fn verify_identity(tokens: &TokenVerifier, auth: &AuthSession) -> Result<(), ActionError> {
    match tokens.verify(&auth.access_token) {
        Ok(claims) if claims.id == auth.user.id => Ok(()),
        Ok(claims) => {
            log::warn!(
                "Token id '{}' does not match session user '{}'",
                claims.id,
                auth.user.id
            );
            Err(ActionError::forbidden(messages::ID_MISMATCH))
        }
        Err(e) => {
            log::warn!("Access token for user {} failed verification: {e}", auth.user.id);
            Err(ActionError::unauthenticated(messages::INVALID_CREDENTIAL))
        }
    }
}
