use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::actions::{ActionContext, slide_group};
use crate::auth::session::get_auth_session;
use crate::errors::AppError;
use crate::models::slide_group::SlideGroupForm;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
}

/// GET /slides/newest
pub async fn newest(ctx: web::Data<ActionContext>) -> Result<HttpResponse, AppError> {
    Ok(slide_group::get_newest_slide_group(&ctx).await.into_response())
}

/// GET /slides - every group, or one page of them with `?page=n`.
pub async fn list(
    ctx: web::Data<ActionContext>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let response = match query.page {
        Some(page) => slide_group::get_slide_groups_by_page(&ctx, page)
            .await
            .into_response(),
        None => slide_group::get_slide_groups(&ctx).await.into_response(),
    };
    Ok(response)
}

/// GET /slides/{id}
pub async fn read(
    ctx: web::Data<ActionContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    Ok(slide_group::get_slide_group(&ctx, &id).await.into_response())
}

/// POST /slides
pub async fn create(
    ctx: web::Data<ActionContext>,
    session: Session,
    body: web::Json<SlideGroupForm>,
) -> Result<HttpResponse, AppError> {
    let auth = get_auth_session(&session);
    let result = slide_group::create_slide_group(&ctx, auth.as_ref(), body.into_inner()).await;
    Ok(result.into_response())
}

/// PUT /slides/{id} - the path id wins over the id in the body.
pub async fn update(
    ctx: web::Data<ActionContext>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<SlideGroupForm>,
) -> Result<HttpResponse, AppError> {
    let auth = get_auth_session(&session);
    let mut form = body.into_inner();
    form.id = path.into_inner();
    let result = slide_group::update_slide_group(&ctx, auth.as_ref(), form).await;
    Ok(result.into_response())
}
