use crate::domain::{
    common::entities::app_errors::CoreError,
    profile::{
        entities::{DietPreference, GenderIdentity, ProfileField, UserProfile},
        value_objects::ProfileSubmission,
    },
};

/// Turns a raw submission into a [`UserProfile`].
///
/// Every missing field is reported at once. The enum selections and body
/// metrics are checked only when nothing is missing.
pub fn validate_profile(submission: ProfileSubmission) -> Result<UserProfile, CoreError> {
    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err(CoreError::MissingFields(missing));
    }

    for field in ProfileField::ALL {
        let value = submission.get(field).unwrap_or_default();
        if value.contains(['\n', '\r']) {
            return Err(CoreError::InvalidField {
                field,
                reason: "line breaks are not allowed".to_string(),
            });
        }
    }

    let gender_identity = submission
        .get(ProfileField::GenderIdentity)
        .unwrap_or_default()
        .parse::<GenderIdentity>()?;
    let diet_preference = submission
        .get(ProfileField::DietPreference)
        .unwrap_or_default()
        .parse::<DietPreference>()?;
    let weight_kg = parse_positive(&submission, ProfileField::BodyWeight)?;
    let height_cm = parse_positive(&submission, ProfileField::HeightInCm)?;

    let ProfileSubmission {
        full_name,
        age_group,
        body_weight,
        height_in_cm,
        allergic_reactions,
        ..
    } = submission;

    Ok(UserProfile {
        full_name: full_name.unwrap_or_default(),
        age_group: age_group.unwrap_or_default(),
        gender_identity,
        body_weight: body_weight.unwrap_or_default(),
        height_in_cm: height_in_cm.unwrap_or_default(),
        diet_preference,
        allergic_reactions: allergic_reactions.unwrap_or_default(),
        weight_kg,
        height_cm,
    })
}

fn parse_positive(submission: &ProfileSubmission, field: ProfileField) -> Result<f64, CoreError> {
    let raw = submission.get(field).unwrap_or_default();
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(CoreError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn complete_submission() -> ProfileSubmission {
        ProfileSubmission {
            full_name: Some("Asha Verma".to_string()),
            age_group: Some("27".to_string()),
            gender_identity: Some("Female".to_string()),
            body_weight: Some("70".to_string()),
            height_in_cm: Some("175".to_string()),
            diet_preference: Some("Non-Veg".to_string()),
            allergic_reactions: Some("peanuts".to_string()),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let profile = validate_profile(complete_submission()).unwrap();

        assert_eq!(profile.full_name(), "Asha Verma");
        assert_eq!(profile.age_group(), "27");
        assert_eq!(profile.gender_identity(), GenderIdentity::Female);
        assert_eq!(profile.diet_preference(), DietPreference::NonVeg);
        assert_eq!(profile.allergic_reactions(), "peanuts");
        assert_eq!(profile.weight_kg(), 70.0);
        assert_eq!(profile.height_cm(), 175.0);
        assert_eq!(profile.raw_value(ProfileField::BodyWeight), "70");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        for field in ProfileField::ALL {
            let mut submission = complete_submission();
            submission.set(field, "");
            assert_eq!(
                validate_profile(submission),
                Err(CoreError::MissingFields(vec![field])),
                "blank {} should be rejected",
                field
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        for field in ProfileField::ALL {
            let mut submission = complete_submission();
            submission.set(field, " \t ");
            assert_eq!(
                validate_profile(submission),
                Err(CoreError::MissingFields(vec![field]))
            );
        }
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let submission = ProfileSubmission {
            age_group: Some("40".to_string()),
            gender_identity: Some("Male".to_string()),
            diet_preference: Some("Veg".to_string()),
            body_weight: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(
            validate_profile(submission),
            Err(CoreError::MissingFields(vec![
                ProfileField::FullName,
                ProfileField::BodyWeight,
                ProfileField::HeightInCm,
                ProfileField::AllergicReactions,
            ]))
        );
    }

    #[test]
    fn none_is_an_acceptable_allergy_answer() {
        let mut submission = complete_submission();
        submission.set(ProfileField::AllergicReactions, "none");
        assert!(validate_profile(submission).is_ok());
    }

    #[test]
    fn rejects_unknown_selections() {
        let mut submission = complete_submission();
        submission.set(ProfileField::GenderIdentity, "male");
        assert!(matches!(
            validate_profile(submission),
            Err(CoreError::InvalidField {
                field: ProfileField::GenderIdentity,
                ..
            })
        ));

        let mut submission = complete_submission();
        submission.set(ProfileField::DietPreference, "Vegan");
        assert!(matches!(
            validate_profile(submission),
            Err(CoreError::InvalidField {
                field: ProfileField::DietPreference,
                ..
            })
        ));
    }

    #[test]
    fn rejects_line_breaks() {
        let mut submission = complete_submission();
        submission.set(ProfileField::FullName, "Asha\nAge: 99");
        assert!(matches!(
            validate_profile(submission),
            Err(CoreError::InvalidField {
                field: ProfileField::FullName,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_metrics() {
        for (field, value) in [
            (ProfileField::BodyWeight, "seventy"),
            (ProfileField::BodyWeight, "0"),
            (ProfileField::BodyWeight, "-60"),
            (ProfileField::HeightInCm, "NaN"),
            (ProfileField::HeightInCm, "inf"),
            (ProfileField::HeightInCm, "175cm"),
        ] {
            let mut submission = complete_submission();
            submission.set(field, value);
            assert_eq!(
                validate_profile(submission),
                Err(CoreError::InvalidNumber {
                    field,
                    value: value.to_string(),
                })
            );
        }
    }

    #[test]
    fn decimal_metrics_are_accepted() {
        let mut submission = complete_submission();
        submission.set(ProfileField::BodyWeight, "68.4");
        submission.set(ProfileField::HeightInCm, " 172.5 ");
        let profile = validate_profile(submission).unwrap();
        assert_eq!(profile.weight_kg(), 68.4);
        assert_eq!(profile.height_cm(), 172.5);
        assert_eq!(profile.raw_value(ProfileField::HeightInCm), " 172.5 ");
    }
}
