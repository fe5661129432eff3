pub mod slide;
pub mod slide_group;

use serde::{Deserialize, Serialize};

/// Page of results as returned by the backend's paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub per_page: i64,
    #[serde(default)]
    pub total: i64,
}
