//! Client-side record search shared by the resource and project views.
//!
//! Records are flattened into one lowercase text blob (`flatten`), matched
//! against whitespace tokens and an optional "from" date (`filter`), and the
//! interactive path re-runs the filter behind a cancellable debounce
//! (`debounce`, `live`).

pub mod debounce;
pub mod filter;
pub mod flatten;
pub mod live;

pub use filter::{filter_records, SearchQuery};
