//! Validation schemas for slide group and slide forms.
//!
//! Each schema is pure: it takes the submitted form and returns either the
//! typed value the backend receives or every field error it found.

use std::fmt;

use crate::auth::validate;
use crate::messages;
use crate::models::slide::{
    PdfUpload, PdfUploadFields, SlideForm, SlideUpdate, SlidesUpload, UploadPdfForm,
    UploadPdfRequestForm, UploadSlidesForm,
};
use crate::models::slide_group::{SlideGroupForm, SlideGroupPayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn check(&mut self, field: &'static str, error: Option<String>) {
        if let Some(message) = error {
            self.0.push(FieldError { field, message });
        }
    }

    fn require<T>(&mut self, field: &'static str, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.0.push(FieldError { field, message: message.to_string() });
        }
        value
    }

    fn extend(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First error reported for `field`.
    pub fn field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All messages joined with "; ", as surfaced to the caller.
    pub fn message(&self) -> String {
        self.0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn slide_group(form: &SlideGroupForm, errors: &mut ValidationErrors) -> Option<SlideGroupPayload> {
    errors.check("id", validate::validate_id(&form.id, messages::SLIDE_GROUP_ID_REQUIRED));
    errors.check("title", validate::validate_required(&form.title, messages::TITLE_REQUIRED));
    let presentation_at =
        errors.require("presentation_at", form.presentation_at, messages::DATE_REQUIRED)?;

    Some(SlideGroupPayload {
        id: form.id.clone(),
        title: form.title.trim().to_string(),
        presentation_at,
        drive_id: form.drive_id.clone().filter(|d| !d.trim().is_empty()),
    })
}

pub fn create_slide_group_schema(form: &SlideGroupForm) -> Result<SlideGroupPayload, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    match slide_group(form, &mut errors) {
        Some(payload) if errors.is_empty() => Ok(payload),
        _ => Err(errors),
    }
}

/// Same as create, and the Google Drive folder id becomes mandatory.
pub fn update_slide_group_schema(form: &SlideGroupForm) -> Result<SlideGroupPayload, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let payload = slide_group(form, &mut errors);
    errors.check(
        "drive_id",
        validate::validate_required(form.drive_id.as_deref().unwrap_or(""), messages::DRIVE_ID_REQUIRED),
    );
    match payload {
        Some(payload) if errors.is_empty() => Ok(payload),
        _ => Err(errors),
    }
}

pub fn update_slide_schema(form: &SlideForm) -> Result<SlideUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("id", validate::validate_id(&form.id, messages::SLIDE_ID_REQUIRED));
    errors.check("title", validate::validate_required(&form.title, messages::TITLE_REQUIRED));
    let is_publish = errors.require("is_publish", form.is_publish, messages::PUBLISH_REQUIRED);
    errors.check("drive_pdf_url", validate::validate_url(&form.drive_pdf_url));
    // group_id ends up as a path segment of the backend URL
    errors.check("group_id", validate::validate_id(&form.group_id, messages::SLIDE_GROUP_ID_REQUIRED));

    match is_publish {
        Some(is_publish) if errors.is_empty() => Ok(SlideUpdate {
            id: form.id.clone(),
            title: form.title.trim().to_string(),
            is_publish,
            drive_pdf_url: form.drive_pdf_url.trim().to_string(),
            storage_thumbnail_url: form.storage_thumbnail_url.clone(),
            google_slide_share_url: form.google_slide_share_url.clone(),
            group_id: form.group_id.clone(),
        }),
        _ => Err(errors),
    }
}

pub fn upload_slides_schema(form: &UploadSlidesForm) -> Result<SlidesUpload, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("id", validate::validate_id(&form.id, messages::SPEAKER_ID_REQUIRED));
    errors.check("title", validate::validate_required(&form.title, messages::TITLE_REQUIRED));
    errors.check(
        "slides_url",
        validate::validate_required_url(&form.slides_url, messages::SLIDES_URL_REQUIRED),
    );

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(SlidesUpload {
        id: form.id.clone(),
        title: form.title.trim().to_string(),
        slides_url: form.slides_url.trim().to_string(),
        slides_share_url: non_empty(&form.slides_share_url),
    })
}

/// Server-facing PDF schema: text fields only.
pub fn upload_pdf_request_schema(form: &UploadPdfRequestForm) -> Result<PdfUploadFields, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    errors.check("id", validate::validate_id(&form.id, messages::SPEAKER_ID_REQUIRED));
    errors.check("title", validate::validate_required(&form.title, messages::TITLE_REQUIRED));

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(PdfUploadFields {
        id: form.id.clone(),
        title: form.title.trim().to_string(),
        slides_share_url: non_empty(&form.slides_share_url),
    })
}

/// Client-facing PDF schema: the text fields plus the first `pdf_file`,
/// which must be sent as `application/pdf`.
pub fn upload_pdf_schema(form: UploadPdfForm) -> Result<PdfUpload, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let fields = upload_pdf_request_schema(&form.fields).map_err(|e| errors.extend(e)).ok();

    let UploadPdfForm { pdf_file, thumbnail, .. } = form;
    let pdf_file = pdf_file.into_iter().next();
    errors.check(
        "pdf_file",
        validate::validate_pdf_media_type(pdf_file.as_ref().and_then(|f| f.content_type.as_deref())),
    );

    match (fields, pdf_file) {
        (Some(fields), Some(pdf_file)) if errors.is_empty() => Ok(PdfUpload {
            fields,
            pdf_file,
            thumbnail,
        }),
        _ => Err(errors),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
