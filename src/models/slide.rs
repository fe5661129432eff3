use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_publish: bool,
    #[serde(default)]
    pub drive_pdf_url: String,
    #[serde(default)]
    pub storage_thumbnail_url: String,
    #[serde(default)]
    pub google_slide_share_url: String,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub speaker_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_publish: Option<bool>,
    #[serde(default)]
    pub drive_pdf_url: String,
    #[serde(default)]
    pub storage_thumbnail_url: String,
    #[serde(default)]
    pub google_slide_share_url: String,
    #[serde(default)]
    pub group_id: String,
}

/// Validated slide edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideUpdate {
    pub id: String,
    pub title: String,
    pub is_publish: bool,
    pub drive_pdf_url: String,
    pub storage_thumbnail_url: String,
    pub google_slide_share_url: String,
    pub group_id: String,
}

/// Body of `PUT /slides/<group_id>/<id>`: the edit plus the speaker id
/// taken from the session, never from the client.
#[derive(Debug, Serialize)]
pub struct SlideUpdateRequest<'a> {
    #[serde(flatten)]
    pub slide: &'a SlideUpdate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<&'a str>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadSlidesForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides_url: String,
    #[serde(default)]
    pub slides_share_url: Option<String>,
}

/// Validated Google Slides upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlidesUpload {
    pub id: String,
    pub title: String,
    pub slides_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_share_url: Option<String>,
}

/// Body of `POST /slides/upload/slides`.
#[derive(Debug, Serialize)]
pub struct SlidesUploadRequest<'a> {
    #[serde(flatten)]
    pub upload: &'a SlidesUpload,
    pub is_publish: bool,
    pub group_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<&'a str>,
    pub drive_id: &'a str,
}

/// Text fields of a PDF upload, without the files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadPdfRequestForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides_share_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUploadFields {
    pub id: String,
    pub title: String,
    pub slides_share_url: Option<String>,
}

/// A file received from the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// Full PDF upload form as submitted by the client.
#[derive(Debug, Clone, Default)]
pub struct UploadPdfForm {
    pub fields: UploadPdfRequestForm,
    pub pdf_file: Vec<Attachment>,
    pub thumbnail: Option<Attachment>,
}

/// Validated PDF upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub fields: PdfUploadFields,
    pub pdf_file: Attachment,
    pub thumbnail: Option<Attachment>,
}
