//! DTOs for review endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `PUT /customer/auth/review/{isbn}`.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub review: Option<String>,
}

/// Reviews of one book keyed by reviewer.
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: BTreeMap<String, String>,
}

/// Result of a review upsert.
#[derive(Debug, Serialize)]
pub struct ReviewSavedResponse {
    pub message: String,
    /// `true` for a first review, `false` when a previous one was replaced.
    pub created: bool,
}
