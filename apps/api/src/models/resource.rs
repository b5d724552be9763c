use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_text, lenient_text_list, null_as_default, Scalar};

/// Proficiency attached to one skill, e.g. `{"level": "expert"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Scalar>,
}

/// Experience attached to one past job title, e.g. `{"years": 4}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Scalar>,
}

/// A person who can be staffed on projects, as stored by the backend.
///
/// Field names follow the backend's PascalCase wire format. Every field may be
/// missing; top-level fields this type does not model (`orgID`, `TeamID`, ...)
/// are kept in `extra` so they survive a round trip and stay searchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "ResourceID", default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<Scalar>,
    #[serde(
        rename = "Name",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(rename = "Rate", default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Scalar>,
    #[serde(rename = "Domain", default, deserialize_with = "lenient_text_list")]
    pub domain: Vec<String>,
    #[serde(
        rename = "AvailableDate",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_date: Option<String>,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, SkillDetail>,
    #[serde(rename = "PastJobTitles", default, deserialize_with = "null_as_default")]
    pub past_job_titles: BTreeMap<String, TitleDetail>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The "add resource" form as submitted by the browser, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewResource {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Rate", default)]
    pub rate: Option<Scalar>,
    #[serde(rename = "AvailableDate", default)]
    pub available_date: Option<String>,
    #[serde(rename = "Domain", default, deserialize_with = "null_as_default")]
    pub domain: Vec<String>,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, SkillDetail>,
    #[serde(rename = "PastJobTitles", default, deserialize_with = "null_as_default")]
    pub past_job_titles: BTreeMap<String, TitleDetail>,
}

/// A validated resource ready to be posted to the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSubmission {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rate")]
    pub rate: Scalar,
    #[serde(rename = "AvailableDate")]
    pub available_date: String,
    #[serde(rename = "Domain")]
    pub domain: Vec<String>,
    #[serde(rename = "Skills")]
    pub skills: BTreeMap<String, SkillDetail>,
    #[serde(rename = "PastJobTitles")]
    pub past_job_titles: BTreeMap<String, TitleDetail>,
    #[serde(rename = "orgID")]
    pub org_id: String,
    /// Team assignment happens later in the backend; new resources start unassigned.
    #[serde(rename = "TeamID")]
    pub team_id: Option<String>,
}
