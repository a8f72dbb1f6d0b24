pub mod insights;
pub mod outcomes;
pub mod plan;
