use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::actions::ActionContext;
use crate::auth::csrf;
use crate::auth::session::{self, AuthSession, Role, SessionUser};
use crate::errors::AppError;
use crate::messages;
use crate::result::{ActionError, ActionResult};

#[derive(Deserialize)]
pub struct SignInRequest {
    pub access_token: String,
}

/// POST /session - store the principal asserted by a provider-issued token.
pub async fn sign_in(
    ctx: web::Data<ActionContext>,
    session: Session,
    body: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    let SignInRequest { access_token } = body.into_inner();

    let claims = match ctx.tokens.verify(&access_token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("Rejected sign-in: {e}");
            return Ok(ActionError::unauthenticated(messages::INVALID_CREDENTIAL)
                .into_envelope()
                .into_response());
        }
    };

    let auth = AuthSession {
        user: SessionUser {
            id: claims.id,
            role: Role::from(claims.role.unwrap_or_default()),
            speaker_id: claims.speaker_id,
        },
        access_token,
    };
    session::store_auth_session(&session, &auth)?;
    log::info!("User {} signed in as '{}'", auth.user.id, auth.user.role.as_str());

    Ok(ActionResult::with_data(messages::SIGNED_IN, Some(auth.user)).into_response())
}

/// DELETE /session
pub async fn sign_out(session: Session) -> Result<HttpResponse, AppError> {
    session::clear_auth_session(&session);
    Ok(ActionResult::<()>::success(messages::SIGNED_OUT).into_response())
}

/// GET /session/csrf - token the multipart upload form must echo back.
pub async fn csrf_token(session: Session) -> Result<HttpResponse, AppError> {
    let token = csrf::get_or_create_token(&session)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "csrf_token": token })))
}
