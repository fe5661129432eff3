use reqwest::Method;

use super::{ActionContext, SLIDES_ROUTE, fetch, transport};
use crate::api::Endpoint;
use crate::api::cache::CacheMode;
use crate::auth::gate;
use crate::auth::session::AuthSession;
use crate::messages;
use crate::models::Paginated;
use crate::models::slide_group::{SlideGroup, SlideGroupForm, SlideGroupPayload};
use crate::result::{ActionError, ActionResult};
use crate::schemas;

pub async fn get_newest_slide_group(ctx: &ActionContext) -> ActionResult<SlideGroup> {
    let endpoint = Endpoint::slides().segment("newest");
    fetch(ctx, &endpoint, CacheMode::NoCache, messages::SLIDE_GROUP_FETCHED).await
}

pub async fn get_slide_groups_by_page(ctx: &ActionContext, page: u32) -> ActionResult<Paginated<SlideGroup>> {
    let endpoint = Endpoint::slides().query("page", page);
    fetch(ctx, &endpoint, CacheMode::ForceCache, messages::SLIDE_GROUP_FETCHED).await
}

pub async fn get_slide_group(ctx: &ActionContext, id: &str) -> ActionResult<SlideGroup> {
    let endpoint = Endpoint::slides().segment(id);
    fetch(ctx, &endpoint, CacheMode::NoStore, messages::SLIDE_GROUP_FETCHED).await
}

pub async fn get_slide_groups(ctx: &ActionContext) -> ActionResult<Vec<SlideGroup>> {
    fetch(ctx, &Endpoint::slides(), CacheMode::NoCache, messages::SLIDE_GROUP_FETCHED).await
}

pub async fn create_slide_group(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: SlideGroupForm,
) -> ActionResult {
    let validated = schemas::create_slide_group_schema(&form);
    match save(ctx, session, Method::POST, validated, messages::SLIDE_GROUP_CREATE_FAILED).await {
        Ok(id) => {
            log::info!("Created slide group {id}");
            ctx.api.revalidate_path(SLIDES_ROUTE);
            ActionResult::success(messages::SLIDE_GROUP_CREATED)
        }
        Err(e) => e.into(),
    }
}

pub async fn update_slide_group(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: SlideGroupForm,
) -> ActionResult {
    let validated = schemas::update_slide_group_schema(&form);
    match save(ctx, session, Method::PUT, validated, messages::SLIDE_GROUP_UPDATE_FAILED).await {
        Ok(id) => {
            log::info!("Updated slide group {id}");
            ctx.api.revalidate_path(SLIDES_ROUTE);
            ActionResult::success(messages::SLIDE_GROUP_UPDATED)
        }
        Err(e) => e.into(),
    }
}

/// Gate, validate and send a slide group to `<method> /slides/<id>`.
/// Returns the id on success.
async fn save(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    method: Method,
    validated: Result<SlideGroupPayload, schemas::ValidationErrors>,
    failure_message: &str,
) -> Result<String, ActionError> {
    let auth = gate::principal(session, messages::NO_PERMISSION)?;
    gate::verify_identity(&ctx.tokens, auth)?;
    gate::require_admin(auth)?;

    let payload = validated.map_err(|errors| {
        log::warn!("Rejected slide group form: {errors}");
        ActionError::validation(errors.message())
    })?;

    let endpoint = Endpoint::slides().segment(&payload.id);
    let response = ctx
        .api
        .send_json(method.clone(), &endpoint, &auth.access_token, &payload)
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{method} {} returned {status}", endpoint.path());
        return Err(ActionError::backend(failure_message));
    }
    Ok(payload.id)
}
