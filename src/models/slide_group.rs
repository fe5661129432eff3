use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slide::Slide;

/// A slide group as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideGroup {
    pub id: String,
    pub title: String,
    pub presentation_at: DateTime<Utc>,
    #[serde(default)]
    pub drive_id: Option<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// Create/update form as submitted by the client. Missing fields
/// deserialize to empty values so the schema can report them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideGroupForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub presentation_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub drive_id: Option<String>,
}

/// Validated body sent to `POST`/`PUT /slides/<id>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlideGroupPayload {
    pub id: String,
    pub title: String,
    pub presentation_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drive_id: Option<String>,
}
