use serde::Deserialize;
use tracing::debug;

use super::flatten::Searchable;

/// Free-text query plus optional "from" date, as typed into the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub from: Option<String>,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, from: Option<&str>) -> Self {
        Self {
            q: q.into(),
            from: from.map(str::to_string),
        }
    }

    /// Lowercase whitespace-separated tokens. An empty query has none.
    pub fn tokens(&self) -> Vec<String> {
        self.q.split_whitespace().map(str::to_lowercase).collect()
    }

    /// The date threshold, treating an empty field as unset.
    pub fn from_date(&self) -> Option<&str> {
        self.from.as_deref().map(str::trim).filter(|d| !d.is_empty())
    }
}

/// Every token must occur somewhere in the flattened text.
pub fn matches_text<T: Searchable>(record: &T, tokens: &[String]) -> bool {
    if tokens.is_empty() {
        return true;
    }
    let text = record.search_text();
    tokens.iter().all(|t| text.contains(t.as_str()))
}

/// Inclusive lexical comparison; ISO dates order the same way as time.
/// A record without a date never passes a set threshold.
pub fn matches_date<T: Searchable>(record: &T, from: Option<&str>) -> bool {
    match from {
        None => true,
        Some(threshold) => record
            .threshold_date()
            .is_some_and(|date| date >= threshold),
    }
}

/// Stable filter: returns the matching records in their original order.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &SearchQuery) -> Vec<&'a T> {
    let tokens = query.tokens();
    let from = query.from_date();

    let matched: Vec<&T> = records
        .iter()
        .filter(|r| matches_date(*r, from) && matches_text(*r, &tokens))
        .collect();

    debug!(
        "search filter: {} token(s), from={:?}, {}/{} matched",
        tokens.len(),
        from,
        matched.len(),
        records.len()
    );
    matched
}
