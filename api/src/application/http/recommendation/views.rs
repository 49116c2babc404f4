use fitplan_core::domain::{
    profile::{
        entities::{DietPreference, GenderIdentity, ProfileField},
        value_objects::ProfileSubmission,
    },
    recommendation::entities::Recommendation,
};

const STYLE: &str = r#"
body { margin: 0; font-family: Helvetica, Arial, sans-serif; background: #1f2a30; }
main { max-width: 760px; margin: 0 auto; padding: 24px; }
.header { font-size: 30px; font-weight: bold; text-align: center; color: #fff;
  margin-bottom: 20px; background: rgba(0, 0, 0, 0.6); padding: 10px; border-radius: 8px; }
.subheader { font-size: 18px; text-align: center; color: #fff; margin-bottom: 25px;
  background: rgba(0, 0, 0, 0.6); padding: 8px; border-radius: 8px; }
form { background: rgba(255, 255, 255, 0.9); padding: 15px; border-radius: 10px; }
label { display: block; margin-top: 10px; font-weight: bold; }
input, select { width: 100%; padding: 6px; box-sizing: border-box; }
button { display: block; margin: 15px auto 0; padding: 8px 18px; }
button:hover { background-color: #defff4; }
.notice { background: #ffe3e3; color: #7a1010; padding: 10px; border-radius: 8px; margin-bottom: 15px; }
.recommendation-box { margin-top: 15px; background: rgba(255, 255, 255, 0.8); padding: 15px;
  border-radius: 10px; white-space: pre-wrap; }
.bmi { font-weight: bold; color: #fff; background: rgba(0, 0, 0, 0.6); padding: 8px; border-radius: 8px; }
"#;

/// Escapes text for use in HTML element content and attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The profile form, optionally preceded by a notice and prefilled.
pub fn render_form_page(root_path: &str, values: &ProfileSubmission, notice: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(notice) = notice {
        body.push_str(&format!(
            r#"<div class="notice">{}</div>"#,
            escape_html(notice)
        ));
    }
    body.push_str(&render_form(root_path, values));
    page(&body)
}

/// Model text followed by the BMI line, with a fresh form below.
pub fn render_result_page(root_path: &str, recommendation: &Recommendation) -> String {
    let mut body = format!(
        r#"<div class="recommendation-box">{}</div><p class="bmi">{}</p>"#,
        escape_html(&recommendation.text),
        escape_html(&recommendation.bmi_summary()),
    );
    body.push_str(&render_form(root_path, &ProfileSubmission::default()));
    page(&body)
}

fn page(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>FitPlan</title>
<style>{STYLE}</style>
</head>
<body>
<main>
<div class="header">Personalized Diet &amp; Fitness Recommendation</div>
<div class="subheader">Tailored suggestions based on your profile</div>
{body}
</main>
</body>
</html>
"#
    )
}

fn render_form(root_path: &str, values: &ProfileSubmission) -> String {
    let mut form = format!(r#"<form method="post" action="{}/">"#, escape_html(root_path));

    text_input(&mut form, values, ProfileField::FullName, "Full Name", "Enter your full name");
    text_input(&mut form, values, ProfileField::AgeGroup, "Age", "Enter your age");
    select_input(
        &mut form,
        values,
        ProfileField::GenderIdentity,
        "Gender",
        &GenderIdentity::ALL.map(|g| g.as_str()),
    );
    text_input(
        &mut form,
        values,
        ProfileField::BodyWeight,
        "Weight (kg)",
        "Enter your weight in kg",
    );
    text_input(
        &mut form,
        values,
        ProfileField::HeightInCm,
        "Height (cm)",
        "Enter your height in cm",
    );
    select_input(
        &mut form,
        values,
        ProfileField::DietPreference,
        "Diet Preference",
        &DietPreference::ALL.map(|d| d.as_str()),
    );
    text_input(
        &mut form,
        values,
        ProfileField::AllergicReactions,
        "Allergic Reactions",
        "Enter any allergies",
    );

    form.push_str(r#"<button type="submit">Get Recommendations</button></form>"#);
    form
}

fn text_input(
    out: &mut String,
    values: &ProfileSubmission,
    field: ProfileField,
    label: &str,
    placeholder: &str,
) {
    out.push_str(&format!(
        r#"<label for="{key}">{label}</label><input type="text" id="{key}" name="{key}" placeholder="{placeholder}" value="{value}">"#,
        key = field.key(),
        value = escape_html(values.get(field).unwrap_or_default()),
    ));
}

fn select_input(
    out: &mut String,
    values: &ProfileSubmission,
    field: ProfileField,
    label: &str,
    options: &[&str],
) {
    let current = values.get(field);
    out.push_str(&format!(
        r#"<label for="{key}">{label}</label><select id="{key}" name="{key}">"#,
        key = field.key(),
    ));
    for option in options {
        let selected = if current == Some(*option) { " selected" } else { "" };
        out.push_str(&format!(
            r#"<option value="{option}"{selected}>{option}</option>"#
        ));
    }
    out.push_str("</select>");
}
