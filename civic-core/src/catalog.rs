//! The shared event catalog.
//!
//! `Catalog` owns one `EventStore` and one `SearchHistory` behind a single
//! read-write lock. Writers (`add_event`, `search`) hold the write lock for
//! the whole operation, so recording a search and answering it are one
//! atomic step. Everything else takes the read lock and hands back owned
//! snapshots, never borrowed views into the lock.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::event::{Event, SearchRecord, non_blank};
use crate::history::SearchHistory;
use crate::ranker::{self, Recommendation};
use crate::search;
use crate::seed;
use crate::store::EventStore;

#[derive(Debug, Default)]
struct CatalogState {
    store: EventStore,
    history: SearchHistory,
}

#[derive(Debug, Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog populated with the sample events, dated relative to `today`.
    pub fn seeded(today: NaiveDate) -> CatalogResult<Self> {
        let catalog = Self::new();
        catalog.extend(seed::sample_events(today))?;
        info!(events = catalog.len(), %today, "seeded catalog");
        Ok(catalog)
    }

    pub fn add_event(&self, event: Event) -> CatalogResult<Arc<Event>> {
        self.state.write().store.add_event(event)
    }

    /// Insert events in order, stopping at the first duplicate id.
    pub fn extend(&self, events: impl IntoIterator<Item = Event>) -> CatalogResult<()> {
        let mut state = self.state.write();
        for event in events {
            state.store.add_event(event)?;
        }
        Ok(())
    }

    /// Record the query, then answer it. See [`search::search`] for the
    /// filter semantics.
    pub fn search(&self, category: Option<&str>, date: Option<NaiveDate>) -> Vec<Arc<Event>> {
        let mut state = self.state.write();
        state.history.record(category, date);

        let results = search::search(&state.store, category, date);
        debug!(
            category = non_blank(category),
            date = ?date,
            results = results.len(),
            "search"
        );
        results
    }

    /// Every event, chronologically.
    pub fn upcoming_events(&self) -> Vec<Arc<Event>> {
        self.state.read().store.upcoming_events().cloned().collect()
    }

    pub fn announcements(&self) -> Vec<Arc<Event>> {
        self.state.read().store.announcements().cloned().collect()
    }

    pub fn categories(&self) -> Vec<String> {
        self.state.read().store.categories()
    }

    pub fn recent_searches(&self) -> Vec<SearchRecord> {
        self.state.read().history.recent_searches()
    }

    /// How many searches have filtered on `category`.
    pub fn search_frequency(&self, category: &str) -> u64 {
        self.state.read().history.frequency(category)
    }

    /// Up to three recommended events for today (local time).
    pub fn recommend(&self) -> Vec<Arc<Event>> {
        self.recommend_on(Local::now().date_naive())
            .into_iter()
            .map(|r| r.event)
            .collect()
    }

    /// Scored recommendations as of `today`.
    pub fn recommend_on(&self, today: NaiveDate) -> Vec<Recommendation> {
        let state = self.state.read();
        let recommendations = ranker::recommend(&state.store, &state.history, today);
        debug!(count = recommendations.len(), %today, "recommend");
        recommendations
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<Event>> {
        self.state.read().store.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().store.is_empty()
    }
}
