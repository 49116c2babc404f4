pub mod bmi;
pub mod common;
pub mod profile;
pub mod recommendation;
