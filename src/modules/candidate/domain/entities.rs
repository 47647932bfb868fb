use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::presence::Presence;

/// Untrusted insertion payload, as decoded from a request body.
///
/// Nothing here is checked on decode beyond JSON shape; see
/// `application::validation::validate_candidate`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    /// Present on the update path. Skips validation entirely.
    /// Kept as raw JSON: any non-null id takes that path, whatever its type.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub id: Presence<JsonValue>,

    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub first_name: Presence<String>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub last_name: Presence<String>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub email: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub phone: Presence<String>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub address: Presence<String>,

    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub educations: Presence<Vec<EducationEntry>>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub work_experiences: Presence<Vec<WorkExperienceEntry>>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub cv: Presence<CvEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub start_date: String,
    /// Absent means ongoing.
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub end_date: Presence<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceEntry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub description: Presence<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub end_date: Presence<String>,
}

/// CV attachment metadata. Values are kept as raw JSON so a
/// wrongly-typed value survives decoding and can be rejected
/// by validation instead of by the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvEntry {
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub file_path: Presence<JsonValue>,
    #[serde(default, skip_serializing_if = "Presence::is_absent")]
    pub file_type: Presence<JsonValue>,
}

impl CvEntry {
    pub fn is_empty(&self) -> bool {
        self.file_path.is_absent() && self.file_type.is_absent()
    }
}
