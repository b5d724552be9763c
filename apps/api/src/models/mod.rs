pub mod project;
pub mod resource;
pub mod scalar;

pub use project::Project;
pub use resource::{NewResource, Resource, ResourceSubmission, SkillDetail, TitleDetail};
pub use scalar::Scalar;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Backend payloads send `null` for empty lists and maps as often as they omit
/// them; both collapse to the empty default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text field that may arrive as a number (`"Name": 42`). Numbers are kept as
/// their printed form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| s.to_string()))
}

/// Tag list whose entries may be strings or numbers. Other entries are dropped.
pub(crate) fn lenient_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .iter()
        .filter_map(Scalar::from_value)
        .map(|s| s.to_string())
        .collect())
}
