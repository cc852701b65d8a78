//! Core types for the civic-events ecosystem.
//!
//! This crate holds the in-memory event catalog used by the web server:
//! - `store`: events indexed by start date and by category, plus announcements
//! - `search`: category/date filtering over those indices
//! - `history`: recent searches and per-category search counts
//! - `ranker`: recommendations scored from search history
//! - `catalog`: the lock-guarded facade shared across request handlers

pub mod catalog;
pub mod error;
pub mod event;
pub mod history;
pub mod ranker;
pub mod search;
pub mod seed;
pub mod sort;
pub mod store;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use event::{Event, SearchRecord};
pub use ranker::Recommendation;
pub use sort::SortOrder;
