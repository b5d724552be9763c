use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{Project, Resource, Scalar, SkillDetail, TitleDetail};

/// Per-record-type extraction strategy used by the generic filter.
pub trait Searchable {
    /// Everything a user might type to find this record, lowercased.
    fn search_text(&self) -> String;

    /// The date compared against the "from" threshold, ISO `YYYY-MM-DD`.
    fn threshold_date(&self) -> Option<&str>;
}

/// Accumulates searchable fragments separated by single spaces.
#[derive(Debug, Default)]
pub struct SearchText {
    buf: String,
}

impl SearchText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: &str) -> &mut Self {
        if fragment.is_empty() {
            return self;
        }
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(&fragment.to_lowercase());
        self
    }

    pub fn push_opt(&mut self, fragment: Option<&str>) -> &mut Self {
        if let Some(f) = fragment {
            self.push(f);
        }
        self
    }

    pub fn push_scalar(&mut self, value: Option<&Scalar>) -> &mut Self {
        if let Some(v) = value {
            self.push(&v.to_string());
        }
        self
    }

    pub fn push_all<S: AsRef<str>>(&mut self, items: &[S]) -> &mut Self {
        for item in items {
            self.push(item.as_ref());
        }
        self
    }

    /// Top-level fields the typed model does not know about. Only strings and
    /// numbers are searchable; nested values and nulls are skipped.
    pub fn push_extra(&mut self, extra: &BTreeMap<String, Value>) -> &mut Self {
        for value in extra.values() {
            self.push_scalar(Scalar::from_value(value).as_ref());
        }
        self
    }

    pub fn push_skills(&mut self, skills: &BTreeMap<String, SkillDetail>) -> &mut Self {
        for (name, detail) in skills {
            self.push(name).push_scalar(detail.level.as_ref());
        }
        self
    }

    pub fn push_titles(&mut self, titles: &BTreeMap<String, TitleDetail>) -> &mut Self {
        for (title, detail) in titles {
            self.push(title).push_scalar(detail.years.as_ref());
        }
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Searchable for Resource {
    fn search_text(&self) -> String {
        let mut text = SearchText::new();
        text.push_scalar(self.resource_id.as_ref())
            .push_opt(self.name.as_deref())
            .push_scalar(self.rate.as_ref())
            .push_opt(self.available_date.as_deref())
            .push_extra(&self.extra)
            .push_skills(&self.skills)
            .push_titles(&self.past_job_titles)
            .push_all(&self.domain);
        text.finish()
    }

    fn threshold_date(&self) -> Option<&str> {
        self.available_date.as_deref()
    }
}

impl Searchable for Project {
    fn search_text(&self) -> String {
        let mut text = SearchText::new();
        text.push_scalar(self.project_id.as_ref())
            .push_opt(self.project_name.as_deref())
            .push_scalar(self.number_of_days.as_ref())
            .push_opt(self.project_start_date.as_deref())
            .push_extra(&self.extra)
            .push_all(&self.technology)
            .push_all(&self.domain);
        for required in &self.required_resources {
            text.push_opt(required.role.as_deref())
                .push_skills(&required.skills);
        }
        text.finish()
    }

    fn threshold_date(&self) -> Option<&str> {
        self.project_start_date.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::RequiredResource;
    use serde_json::json;

    fn jane() -> Resource {
        serde_json::from_value(json!({
            "ResourceID": 1,
            "Name": "Jane Doe",
            "Rate": 85.5,
            "Domain": ["Fintech"],
            "AvailableDate": "2024-05-01",
            "Skills": {"Python": {"level": "Expert"}},
            "PastJobTitles": {"Data Engineer": {"years": 4}},
            "orgID": "ORG_42",
            "TeamID": null
        }))
        .unwrap()
    }

    #[test]
    fn test_resource_text_covers_every_field() {
        let text = jane().search_text();
        for needle in [
            "1", "jane doe", "85.5", "2024-05-01", "fintech", "python", "expert",
            "data engineer", "4", "org_42",
        ] {
            assert!(text.contains(needle), "missing {needle:?} in {text:?}");
        }
        assert!(!text.contains("null"));
    }

    #[test]
    fn test_text_is_lowercase() {
        let text = jane().search_text();
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn test_empty_resource_flattens_to_empty_string() {
        assert_eq!(Resource::default().search_text(), "");
    }

    #[test]
    fn test_project_text_includes_roles_and_skill_names() {
        let project = Project {
            project_id: Some(Scalar::from(9)),
            project_name: Some("Alpha".into()),
            number_of_days: Some(Scalar::from(30)),
            project_start_date: Some("2024-01-10".into()),
            technology: vec!["React".into(), "Rust".into()],
            domain: vec!["Logistics".into()],
            required_resources: vec![RequiredResource {
                role: Some("Backend Lead".into()),
                quantity: Some(Scalar::from(2)),
                skills: [("Kafka".to_string(), SkillDetail { level: Some("senior".into()) })]
                    .into_iter()
                    .collect(),
            }],
            ..Default::default()
        };

        let text = project.search_text();
        for needle in ["alpha", "30", "react rust", "logistics", "backend lead", "kafka", "senior"] {
            assert!(text.contains(needle), "missing {needle:?} in {text:?}");
        }
    }

    #[test]
    fn test_threshold_dates() {
        assert_eq!(jane().threshold_date(), Some("2024-05-01"));
        assert_eq!(Project::default().threshold_date(), None);
    }

    #[test]
    fn test_builder_skips_empty_fragments() {
        let mut text = SearchText::new();
        text.push("").push("A").push_opt(None).push("").push("b");
        assert_eq!(text.finish(), "a b");
    }
}
