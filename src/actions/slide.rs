use reqwest::multipart::{Form, Part};
use reqwest::{Method, Response};

use super::{ActionContext, fetch, transport};
use crate::api::cache::CacheMode;
use crate::api::{self, Endpoint};
use crate::auth::gate;
use crate::auth::session::AuthSession;
use crate::messages;
use crate::models::slide::{
    Attachment, PdfUpload, Slide, SlideForm, SlideUpdateRequest, SlidesUploadRequest,
    UploadPdfForm, UploadSlidesForm,
};
use crate::result::{ActionError, ActionResult};
use crate::schemas;

pub async fn get_slide(ctx: &ActionContext, group_id: &str, slide_id: &str) -> ActionResult<Slide> {
    let endpoint = Endpoint::slides().segment(group_id).segment(slide_id);
    fetch(ctx, &endpoint, CacheMode::NoStore, messages::SLIDE_FETCHED).await
}

pub async fn update_slide(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: SlideForm,
) -> ActionResult {
    match try_update_slide(ctx, session, form).await {
        Ok(()) => ActionResult::success(messages::SLIDE_UPDATED),
        Err(e) => e.into(),
    }
}

async fn try_update_slide(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: SlideForm,
) -> Result<(), ActionError> {
    let auth = gate::principal(session, messages::LOGIN_REQUIRED)?;
    gate::require_editor(auth)?;

    let slide = schemas::update_slide_schema(&form).map_err(|errors| {
        log::warn!("Rejected slide form: {errors}");
        ActionError::validation(errors.message())
    })?;

    let endpoint = Endpoint::slides().segment(&slide.group_id).segment(&slide.id);
    let body = SlideUpdateRequest {
        slide: &slide,
        speaker_id: auth.user.speaker_id.as_deref(),
    };
    let response = ctx
        .api
        .send_json(Method::PUT, &endpoint, &auth.access_token, &body)
        .await
        .map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("PUT {} returned {status}", endpoint.path());
        return Err(ActionError::backend(messages::SLIDE_UPDATE_FAILED));
    }
    log::info!("Updated slide {}/{}", slide.group_id, slide.id);
    Ok(())
}

pub async fn upload_slide_by_google_slides_url(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: UploadSlidesForm,
    group_id: &str,
    drive_id: &str,
) -> ActionResult {
    match try_upload_by_url(ctx, session, form, group_id, drive_id).await {
        Ok(()) => ActionResult::success(messages::SLIDE_UPLOADED),
        Err(e) => e.into(),
    }
}

async fn try_upload_by_url(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: UploadSlidesForm,
    group_id: &str,
    drive_id: &str,
) -> Result<(), ActionError> {
    let auth = gate::principal(session, messages::LOGIN_REQUIRED)?;
    gate::verify_identity(&ctx.tokens, auth)?;

    let upload = schemas::upload_slides_schema(&form).map_err(|errors| {
        log::warn!("Rejected Google Slides upload: {errors}");
        ActionError::validation(errors.message())
    })?;

    let endpoint = Endpoint::slides().segment("upload").segment("slides");
    let body = SlidesUploadRequest {
        upload: &upload,
        is_publish: false,
        group_id,
        speaker_id: auth.user.speaker_id.as_deref(),
        drive_id,
    };
    let response = ctx
        .api
        .send_json(Method::POST, &endpoint, &auth.access_token, &body)
        .await
        .map_err(transport)?;

    check_upload(response, &endpoint).await?;
    log::info!("Uploaded slide {} from Google Slides into group {group_id}", upload.id);
    Ok(())
}

pub async fn upload_slide_by_pdf(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: UploadPdfForm,
    group_id: &str,
    drive_id: &str,
) -> ActionResult {
    match try_upload_by_pdf(ctx, session, form, group_id, drive_id).await {
        Ok(()) => ActionResult::success(messages::SLIDE_UPLOADED),
        Err(e) => e.into(),
    }
}

async fn try_upload_by_pdf(
    ctx: &ActionContext,
    session: Option<&AuthSession>,
    form: UploadPdfForm,
    group_id: &str,
    drive_id: &str,
) -> Result<(), ActionError> {
    let auth = gate::principal(session, messages::LOGIN_REQUIRED)?;
    gate::verify_identity(&ctx.tokens, auth)?;

    let upload = schemas::upload_pdf_schema(form).map_err(|errors| {
        log::warn!("Rejected PDF upload: {errors}");
        ActionError::validation(errors.message())
    })?;
    let slide_id = upload.fields.id.clone();

    let body = pdf_form(upload, group_id, auth.user.speaker_id.as_deref(), drive_id)
        .map_err(|e| transport(e.into()))?;

    let endpoint = Endpoint::slides().segment("upload").segment("pdf");
    let response = ctx
        .api
        .send_multipart(&endpoint, &auth.access_token, body)
        .await
        .map_err(transport)?;

    check_upload(response, &endpoint).await?;
    log::info!("Uploaded slide {slide_id} from PDF into group {group_id}");
    Ok(())
}

/// Uploads surface the backend's own error message when it sends one.
async fn check_upload(response: Response, endpoint: &Endpoint) -> Result<(), ActionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    log::warn!("POST {} returned {status}", endpoint.path());
    let message = api::error_message(response)
        .await
        .unwrap_or_else(|| messages::SLIDE_UPLOAD_FAILED.to_string());
    Err(ActionError::backend(message))
}

fn pdf_form(
    upload: PdfUpload,
    group_id: &str,
    speaker_id: Option<&str>,
    drive_id: &str,
) -> Result<Form, reqwest::Error> {
    let PdfUpload { fields, pdf_file, thumbnail } = upload;

    let mut form = Form::new()
        .text("id", fields.id)
        .text("title", fields.title)
        .text("is_publish", "false")
        .text("group_id", group_id.to_string())
        .text("drive_id", drive_id.to_string());
    if let Some(share_url) = fields.slides_share_url {
        form = form.text("slides_share_url", share_url);
    }
    if let Some(speaker_id) = speaker_id {
        form = form.text("speaker_id", speaker_id.to_string());
    }

    form = form.part("pdf_file", file_part(pdf_file, "slides.pdf")?);
    if let Some(thumbnail) = thumbnail {
        form = form.part("thumbnail", file_part(thumbnail, "thumbnail")?);
    }
    Ok(form)
}

fn file_part(file: Attachment, fallback_name: &str) -> Result<Part, reqwest::Error> {
    let part = Part::bytes(file.data)
        .file_name(file.file_name.unwrap_or_else(|| fallback_name.to_string()));
    match file.content_type {
        Some(content_type) => part.mime_str(&content_type),
        None => Ok(part),
    }
}
