pub mod session_handlers;
pub mod slide_group_handlers;
pub mod slide_handlers;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{error::InternalError, middleware::from_fn, web};

use crate::auth::middleware::require_json_content_type;
use crate::result::ActionError;

const UPLOAD_LIMIT: usize = 64 * 1024 * 1024;

/// Malformed JSON bodies still answer with a failure envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = ActionError::validation(err.to_string())
            .into_envelope()
            .into_response();
        InternalError::from_response(err, response).into()
    })
}

pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(UPLOAD_LIMIT)
        .memory_limit(UPLOAD_LIMIT)
}

/// Configure session and slide routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(multipart_config());

    cfg.service(
        web::scope("/session")
            .route("", web::post().to(session_handlers::sign_in))
            .route("", web::delete().to(session_handlers::sign_out))
            .route("/csrf", web::get().to(session_handlers::csrf_token)),
    );

    // Multipart, so it sits outside the JSON-only scope and checks the CSRF token instead.
    // Must be registered before the /slides scope.
    cfg.route(
        "/slides/{group_id}/upload/pdf",
        web::post().to(slide_handlers::upload_pdf),
    );

    // /slides/newest BEFORE /slides/{id} to avoid routing conflict
    cfg.service(
        web::scope("/slides")
            .wrap(from_fn(require_json_content_type))
            .route("", web::get().to(slide_group_handlers::list))
            .route("", web::post().to(slide_group_handlers::create))
            .route("/newest", web::get().to(slide_group_handlers::newest))
            .route("/{id}", web::get().to(slide_group_handlers::read))
            .route("/{id}", web::put().to(slide_group_handlers::update))
            .route("/{group_id}/upload/slides", web::post().to(slide_handlers::upload_slides))
            .route("/{group_id}/{slide_id}", web::get().to(slide_handlers::read))
            .route("/{group_id}/{slide_id}", web::put().to(slide_handlers::update)),
    );
}
