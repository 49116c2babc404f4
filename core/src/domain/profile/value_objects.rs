use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::profile::entities::ProfileField;

/// Raw form input, exactly as submitted. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileSubmission {
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
    #[schema(example = "29")]
    pub age_group: Option<String>,
    #[schema(example = "Female")]
    pub gender_identity: Option<String>,
    #[schema(example = "62")]
    pub body_weight: Option<String>,
    #[schema(example = "168")]
    pub height_in_cm: Option<String>,
    #[schema(example = "Veg")]
    pub diet_preference: Option<String>,
    #[schema(example = "none")]
    pub allergic_reactions: Option<String>,
}

impl ProfileSubmission {
    pub fn get(&self, field: ProfileField) -> Option<&str> {
        let value = match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::AgeGroup => &self.age_group,
            ProfileField::GenderIdentity => &self.gender_identity,
            ProfileField::BodyWeight => &self.body_weight,
            ProfileField::HeightInCm => &self.height_in_cm,
            ProfileField::DietPreference => &self.diet_preference,
            ProfileField::AllergicReactions => &self.allergic_reactions,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::AgeGroup => &mut self.age_group,
            ProfileField::GenderIdentity => &mut self.gender_identity,
            ProfileField::BodyWeight => &mut self.body_weight,
            ProfileField::HeightInCm => &mut self.height_in_cm,
            ProfileField::DietPreference => &mut self.diet_preference,
            ProfileField::AllergicReactions => &mut self.allergic_reactions,
        };
        *slot = Some(value.into());
    }

    /// Fields that are absent or blank, in canonical order.
    pub fn missing_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none_or(|value| value.trim().is_empty()))
            .collect()
    }
}
