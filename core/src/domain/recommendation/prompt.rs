use crate::domain::profile::{
    entities::{ProfileField, UserProfile},
    value_objects::ProfileSubmission,
};

/// Instruction block sent ahead of the profile. The model is tuned against
/// this exact wording, including the missing space before "Based".
pub const RECOMMENDATION_INSTRUCTIONS: &str = "Diet and Exercise Recommendation System:\n\
I want you to suggest 6 types of home workouts with detailed instructions in points, \
6 breakfast ideas with nutritional information, \
5 dinner options with nutritional information, \
and 6 gym workout plans in detailed points and for each day of the week.\
Based on the following details:\n";

/// Renders the profile as the single prompt sent to the model: the
/// instructions followed by one `Label: value` line per field.
pub fn render_prompt(profile: &UserProfile) -> String {
    let mut prompt = String::from(RECOMMENDATION_INSTRUCTIONS);

    for field in ProfileField::ALL {
        prompt.push_str(field.prompt_label());
        prompt.push_str(": ");
        prompt.push_str(profile.raw_value(field));
        prompt.push('\n');
    }

    prompt
}

/// Recovers the field values from a prompt produced by [`render_prompt`].
pub fn parse_prompt(prompt: &str) -> Option<ProfileSubmission> {
    let body = prompt
        .strip_prefix(RECOMMENDATION_INSTRUCTIONS)?
        .strip_suffix('\n')?;

    let mut lines = body.split('\n');
    let mut submission = ProfileSubmission::default();

    for field in ProfileField::ALL {
        let value = lines
            .next()?
            .strip_prefix(field.prompt_label())?
            .strip_prefix(": ")?;
        submission.set(field, value);
    }

    match lines.next() {
        Some(_) => None,
        None => Some(submission),
    }
}
