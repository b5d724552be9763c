use serde::{de, Deserialize, Deserializer, Serialize};

use crate::search::SearchQuery;

/// Organization selected by the identity provider. Every backend fetch is
/// scoped to it.
#[derive(Debug, Deserialize)]
pub struct OrgQuery {
    #[serde(deserialize_with = "org_id")]
    pub org_id: String,
}

/// `?org_id=..&q=..&from=..` on the list routes.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(deserialize_with = "org_id")]
    pub org_id: String,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub from: Option<String>,
}

impl ListQuery {
    pub fn search(&self) -> SearchQuery {
        SearchQuery::new(self.q.clone(), self.from.as_deref())
    }
}

/// Trimmed organization id. A blank one fails extraction, so every route
/// answers 400 before any backend call.
pub fn org_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(de::Error::custom("org_id must not be blank"));
    }
    Ok(trimmed.to_string())
}

/// Rows shown in a list view, with the size of the unfiltered collection.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub matched: usize,
    pub records: Vec<T>,
}
