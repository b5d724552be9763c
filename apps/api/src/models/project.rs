use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_text, lenient_text_list, null_as_default, Scalar, SkillDetail};

/// One role a project needs filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredResource {
    #[serde(
        rename = "Role",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Scalar>,
    #[serde(rename = "Skills", default, deserialize_with = "null_as_default")]
    pub skills: BTreeMap<String, SkillDetail>,
}

impl RequiredResource {
    /// Headcount requested for this role. A missing or unreadable quantity
    /// counts as one seat; a fractional one rounds up to a whole seat.
    pub fn headcount(&self) -> u32 {
        match self.quantity.as_ref().and_then(Scalar::as_f64) {
            Some(q) if q > 0.0 => q.ceil() as u32,
            Some(_) => 0,
            None => 1,
        }
    }
}

/// An engagement that requires staffing, as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ProjectID", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<Scalar>,
    #[serde(
        rename = "ProjectName",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_name: Option<String>,
    #[serde(rename = "NumberOfDays", default, skip_serializing_if = "Option::is_none")]
    pub number_of_days: Option<Scalar>,
    #[serde(
        rename = "ProjectStartDate",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub project_start_date: Option<String>,
    #[serde(rename = "Technology", default, deserialize_with = "lenient_text_list")]
    pub technology: Vec<String>,
    #[serde(rename = "Domain", default, deserialize_with = "lenient_text_list")]
    pub domain: Vec<String>,
    #[serde(rename = "RequiredResources", default, deserialize_with = "null_as_default")]
    pub required_resources: Vec<RequiredResource>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Project {
    pub fn needs_resources(&self) -> bool {
        self.required_resources.iter().any(|r| r.headcount() > 0)
    }
}
