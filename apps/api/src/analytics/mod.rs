// Analytics overview: headline counts and breakdowns over the records an
// organization currently has. Computed on every request from a fresh fetch.

pub mod handlers;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Project, Resource};

const UNSPECIFIED_ROLE: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewReport {
    pub as_of: NaiveDate,
    pub total_projects: usize,
    pub projects_needing_resources: usize,
    pub total_resources: usize,
    /// Resources whose available date is on or before `as_of`.
    pub available_resources: usize,
    /// Seats requested across all projects, per role.
    pub required_by_role: Vec<CountEntry>,
    pub resources_by_domain: Vec<CountEntry>,
    pub projects_by_technology: Vec<CountEntry>,
}

pub fn compute_overview(
    resources: &[Resource],
    projects: &[Project],
    as_of: NaiveDate,
) -> OverviewReport {
    let as_of_key = as_of.format("%Y-%m-%d").to_string();

    let available_resources = resources
        .iter()
        .filter(|r| {
            r.available_date
                .as_deref()
                .is_some_and(|d| d <= as_of_key.as_str())
        })
        .count();

    let mut by_role: BTreeMap<String, u32> = BTreeMap::new();
    for required in projects.iter().flat_map(|p| &p.required_resources) {
        let role = required
            .role
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(UNSPECIFIED_ROLE);
        *by_role.entry(role.to_string()).or_default() += required.headcount();
    }
    by_role.retain(|_, seats| *seats > 0);

    OverviewReport {
        as_of,
        total_projects: projects.len(),
        projects_needing_resources: projects.iter().filter(|p| p.needs_resources()).count(),
        total_resources: resources.len(),
        available_resources,
        required_by_role: ranked(by_role),
        resources_by_domain: ranked(count_tags(resources.iter().map(|r| &r.domain))),
        projects_by_technology: ranked(count_tags(projects.iter().map(|p| &p.technology))),
    }
}

/// Counts each distinct tag once per record.
fn count_tags<'a, I>(tag_lists: I) -> BTreeMap<String, u32>
where
    I: Iterator<Item = &'a Vec<String>>,
{
    let mut counts = BTreeMap::new();
    for tags in tag_lists {
        let distinct: BTreeSet<&str> = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect();
        for tag in distinct {
            *counts.entry(tag.to_string()).or_default() += 1;
        }
    }
    counts
}

/// Highest count first; ties keep alphabetical order.
fn ranked(counts: BTreeMap<String, u32>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(name, count)| CountEntry { name, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
