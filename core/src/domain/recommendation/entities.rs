use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    bmi::entities::BmiResult,
    common::{generate_timestamp, generate_uuid_v7},
};

/// Model output for one submission together with the locally computed BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recommendation {
    pub id: Uuid,
    /// Free text from the model, possibly containing markup.
    pub text: String,
    pub bmi: BmiResult,
    pub generated_at: DateTime<Utc>,
}

impl Recommendation {
    pub fn new(text: String, bmi: BmiResult) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            text,
            bmi,
            generated_at: now,
        }
    }

    pub fn bmi_summary(&self) -> String {
        self.bmi.summary()
    }
}
