//! Student profile parsing.
//!
//! Accepts the camelCase JSON submitted by clients, validates the shape,
//! and fills in the dedup checksum when the caller did not provide one.

use crate::api::StudentProfile;
use anyhow::{Context, Result};

fn validate_input_profile(profile_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(profile_json).context("Invalid profile JSON")?;
    let has_subjects = value
        .as_object()
        .and_then(|obj| obj.get("subjects"))
        .is_some();
    if !has_subjects {
        anyhow::bail!("Missing required 'subjects' field");
    }
    Ok(())
}

/// Parse a student profile from a JSON string.
///
/// Out-of-range numeric values are not rejected here: the scheduler
/// degrades them to the documented clamps instead of failing the whole
/// request. Only structurally invalid JSON is an error.
pub fn parse_student_profile_json_str(profile_json: &str) -> Result<StudentProfile> {
    validate_input_profile(profile_json)?;

    let mut profile: StudentProfile = serde_json::from_str(profile_json)
        .context("Failed to deserialize student profile JSON")?;

    // Compute checksum if not provided
    if profile.checksum.is_empty() {
        profile.checksum = crate::db::checksum::profile_checksum(profile_json);
    }

    Ok(profile)
}
