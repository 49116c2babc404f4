use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{services::validate_profile, value_objects::ProfileSubmission},
};

/// The seven inputs of the profile form, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    FullName,
    AgeGroup,
    GenderIdentity,
    BodyWeight,
    HeightInCm,
    DietPreference,
    AllergicReactions,
}

impl ProfileField {
    pub const ALL: [ProfileField; 7] = [
        ProfileField::FullName,
        ProfileField::AgeGroup,
        ProfileField::GenderIdentity,
        ProfileField::BodyWeight,
        ProfileField::HeightInCm,
        ProfileField::DietPreference,
        ProfileField::AllergicReactions,
    ];

    /// Form and JSON key.
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::FullName => "full_name",
            ProfileField::AgeGroup => "age_group",
            ProfileField::GenderIdentity => "gender_identity",
            ProfileField::BodyWeight => "body_weight",
            ProfileField::HeightInCm => "height_in_cm",
            ProfileField::DietPreference => "diet_preference",
            ProfileField::AllergicReactions => "allergic_reactions",
        }
    }

    /// Label used in the rendered prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            ProfileField::FullName => "Full Name",
            ProfileField::AgeGroup => "Age",
            ProfileField::GenderIdentity => "Gender",
            ProfileField::BodyWeight => "Weight",
            ProfileField::HeightInCm => "Height",
            ProfileField::DietPreference => "Diet Preference",
            ProfileField::AllergicReactions => "Allergic Reactions",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GenderIdentity {
    Male,
    Female,
}

impl GenderIdentity {
    pub const ALL: [GenderIdentity; 2] = [GenderIdentity::Male, GenderIdentity::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            GenderIdentity::Male => "Male",
            GenderIdentity::Female => "Female",
        }
    }
}

impl FromStr for GenderIdentity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(GenderIdentity::Male),
            "Female" => Ok(GenderIdentity::Female),
            other => Err(CoreError::InvalidField {
                field: ProfileField::GenderIdentity,
                reason: format!("expected Male or Female, got {:?}", other),
            }),
        }
    }
}

impl fmt::Display for GenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DietPreference {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl DietPreference {
    pub const ALL: [DietPreference; 2] = [DietPreference::Veg, DietPreference::NonVeg];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Veg => "Veg",
            DietPreference::NonVeg => "Non-Veg",
        }
    }
}

impl FromStr for DietPreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Veg" => Ok(DietPreference::Veg),
            "Non-Veg" => Ok(DietPreference::NonVeg),
            other => Err(CoreError::InvalidField {
                field: ProfileField::DietPreference,
                reason: format!("expected Veg or Non-Veg, got {:?}", other),
            }),
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated profile. Only obtainable through [`validate_profile`],
/// so holding one means every field is present and the body metrics parse.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub(crate) full_name: String,
    pub(crate) age_group: String,
    pub(crate) gender_identity: GenderIdentity,
    pub(crate) body_weight: String,
    pub(crate) height_in_cm: String,
    pub(crate) diet_preference: DietPreference,
    pub(crate) allergic_reactions: String,
    pub(crate) weight_kg: f64,
    pub(crate) height_cm: f64,
}

impl UserProfile {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn age_group(&self) -> &str {
        &self.age_group
    }

    pub fn gender_identity(&self) -> GenderIdentity {
        self.gender_identity
    }

    pub fn diet_preference(&self) -> DietPreference {
        self.diet_preference
    }

    pub fn allergic_reactions(&self) -> &str {
        &self.allergic_reactions
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// The value of a field as the user typed it.
    pub fn raw_value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::AgeGroup => &self.age_group,
            ProfileField::GenderIdentity => self.gender_identity.as_str(),
            ProfileField::BodyWeight => &self.body_weight,
            ProfileField::HeightInCm => &self.height_in_cm,
            ProfileField::DietPreference => self.diet_preference.as_str(),
            ProfileField::AllergicReactions => &self.allergic_reactions,
        }
    }
}

impl TryFrom<ProfileSubmission> for UserProfile {
    type Error = CoreError;

    fn try_from(submission: ProfileSubmission) -> Result<Self, Self::Error> {
        validate_profile(submission)
    }
}
