use fitplan_core::domain::profile::value_objects::ProfileSubmission;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Profile fields as sent by the form or a JSON client. Presence is checked
/// by the core; only size limits live here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendationRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "full_name must be at most 200 characters"))]
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 50, message = "age_group must be at most 50 characters"))]
    #[schema(example = "29")]
    pub age_group: Option<String>,

    #[serde(default)]
    #[schema(example = "Female")]
    pub gender_identity: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "body_weight must be at most 20 characters"))]
    #[schema(example = "62")]
    pub body_weight: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "height_in_cm must be at most 20 characters"))]
    #[schema(example = "168")]
    pub height_in_cm: Option<String>,

    #[serde(default)]
    #[schema(example = "Veg")]
    pub diet_preference: Option<String>,

    #[serde(default)]
    #[validate(length(
        max = 1000,
        message = "allergic_reactions must be at most 1000 characters"
    ))]
    #[schema(example = "none")]
    pub allergic_reactions: Option<String>,
}

impl From<RecommendationRequest> for ProfileSubmission {
    fn from(request: RecommendationRequest) -> Self {
        ProfileSubmission {
            full_name: request.full_name,
            age_group: request.age_group,
            gender_identity: request.gender_identity,
            body_weight: request.body_weight,
            height_in_cm: request.height_in_cm,
            diet_preference: request.diet_preference,
            allergic_reactions: request.allergic_reactions,
        }
    }
}
