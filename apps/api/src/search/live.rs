//! Debounced search state for interactive callers (a TUI or desktop view).
//! The stateless HTTP routes call `filter_records` directly instead.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::debug;

use super::debounce::Debouncer;
use super::filter::{filter_records, SearchQuery};
use super::flatten::Searchable;

/// Search state of one list view: the records last fetched, the current query
/// and the rows currently shown.
///
/// Owned by the UI-update path. Records are replaced wholesale on every fetch
/// and never mutated in place. Text input is debounced; the date threshold and
/// new records apply immediately. Rows are published on a watch channel.
pub struct LiveSearch<T> {
    records: Arc<Vec<T>>,
    query: SearchQuery,
    rows: Arc<watch::Sender<Vec<T>>>,
    debouncer: Debouncer,
}

impl<T> LiveSearch<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    pub fn new(records: Vec<T>, debounce: Duration) -> Self {
        let records = Arc::new(records);
        let query = SearchQuery::default();
        let (tx, _rx) = watch::channel(refilter(&records, &query));
        Self {
            records,
            query,
            rows: Arc::new(tx),
            debouncer: Debouncer::new(debounce),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<T>> {
        self.rows.subscribe()
    }

    /// Rows as of the last completed refilter.
    pub fn rows(&self) -> Vec<T> {
        self.rows.borrow().clone()
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Updates the free text and refilters once input has been quiet for the
    /// debounce delay. Requires a tokio runtime.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.q = text.into();
        let records = Arc::clone(&self.records);
        let query = self.query.clone();
        let rows = Arc::clone(&self.rows);
        self.debouncer.schedule(async move {
            rows.send_replace(refilter(&records, &query));
        });
    }

    pub fn set_from_date(&mut self, from: Option<String>) {
        self.query.from = from;
        self.refresh_now();
    }

    pub fn replace_records(&mut self, records: Vec<T>) {
        debug!("live search: replacing {} record(s) with {}", self.records.len(), records.len());
        self.records = Arc::new(records);
        self.refresh_now();
    }

    /// Refilters with the newest state; any pending debounced run would only
    /// repeat this work, so it is dropped.
    fn refresh_now(&mut self) {
        self.debouncer.cancel();
        self.rows.send_replace(refilter(&self.records, &self.query));
    }
}

fn refilter<T: Searchable + Clone>(records: &[T], query: &SearchQuery) -> Vec<T> {
    filter_records(records, query).into_iter().cloned().collect()
}
