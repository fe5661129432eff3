use actix_multipart::form::{MultipartForm, bytes::Bytes, text::Text};
use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::actions::{ActionContext, slide};
use crate::auth::csrf;
use crate::auth::session::get_auth_session;
use crate::errors::AppError;
use crate::models::slide::{Attachment, SlideForm, UploadPdfForm, UploadPdfRequestForm, UploadSlidesForm};

#[derive(Deserialize)]
pub struct UploadSlidesRequest {
    #[serde(flatten)]
    pub form: UploadSlidesForm,
    #[serde(default)]
    pub drive_id: String,
}

#[derive(MultipartForm)]
pub struct PdfUploadMultipart {
    pub csrf_token: Text<String>,
    pub id: Option<Text<String>>,
    pub title: Option<Text<String>>,
    pub slides_share_url: Option<Text<String>>,
    pub drive_id: Option<Text<String>>,
    #[multipart(limit = "50MB")]
    pub pdf_file: Vec<Bytes>,
    #[multipart(limit = "10MB")]
    pub thumbnail: Option<Bytes>,
}

fn attachment(file: Bytes) -> Attachment {
    Attachment {
        file_name: file.file_name,
        content_type: file.content_type.map(|m| m.essence_str().to_string()),
        data: file.data.to_vec(),
    }
}

fn text(field: Option<Text<String>>) -> String {
    field.map(|t| t.0).unwrap_or_default()
}

/// GET /slides/{group_id}/{slide_id}
pub async fn read(
    ctx: web::Data<ActionContext>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (group_id, slide_id) = path.into_inner();
    Ok(slide::get_slide(&ctx, &group_id, &slide_id).await.into_response())
}

/// PUT /slides/{group_id}/{slide_id}
pub async fn update(
    ctx: web::Data<ActionContext>,
    session: Session,
    path: web::Path<(String, String)>,
    body: web::Json<SlideForm>,
) -> Result<HttpResponse, AppError> {
    let auth = get_auth_session(&session);
    let (group_id, slide_id) = path.into_inner();
    let mut form = body.into_inner();
    form.group_id = group_id;
    form.id = slide_id;
    Ok(slide::update_slide(&ctx, auth.as_ref(), form).await.into_response())
}

/// POST /slides/{group_id}/upload/slides
pub async fn upload_slides(
    ctx: web::Data<ActionContext>,
    session: Session,
    path: web::Path<String>,
    body: web::Json<UploadSlidesRequest>,
) -> Result<HttpResponse, AppError> {
    let auth = get_auth_session(&session);
    let group_id = path.into_inner();
    let UploadSlidesRequest { form, drive_id } = body.into_inner();
    let result =
        slide::upload_slide_by_google_slides_url(&ctx, auth.as_ref(), form, &group_id, &drive_id).await;
    Ok(result.into_response())
}

/// POST /slides/{group_id}/upload/pdf (multipart/form-data)
pub async fn upload_pdf(
    ctx: web::Data<ActionContext>,
    session: Session,
    path: web::Path<String>,
    MultipartForm(upload): MultipartForm<PdfUploadMultipart>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &upload.csrf_token)?;

    let auth = get_auth_session(&session);
    let group_id = path.into_inner();
    let drive_id = text(upload.drive_id);
    let form = UploadPdfForm {
        fields: UploadPdfRequestForm {
            id: text(upload.id),
            title: text(upload.title),
            slides_share_url: upload.slides_share_url.map(|t| t.0),
        },
        pdf_file: upload.pdf_file.into_iter().map(attachment).collect(),
        // an empty file input still arrives as a zero-length part
        thumbnail: upload.thumbnail.map(attachment).filter(|t| !t.data.is_empty()),
    };

    let result = slide::upload_slide_by_pdf(&ctx, auth.as_ref(), form, &group_id, &drive_id).await;
    Ok(result.into_response())
}
