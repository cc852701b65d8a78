//! Event store and its indices.
//!
//! The store is insert-only. Every event lives in exactly one date bucket and
//! one category set; both are kept in canonical order as events arrive, so
//! reads never sort.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::event::{Event, OrderKey, canonical_cmp, category_key};

#[derive(Debug, Default)]
pub struct EventStore {
    by_id: HashMap<Uuid, Arc<Event>>,
    /// Start date -> events starting that day, canonical order
    by_date: BTreeMap<NaiveDate, Vec<Arc<Event>>>,
    /// Category key -> events in that category, canonical order
    by_category: BTreeMap<String, BTreeMap<OrderKey, Arc<Event>>>,
    /// Category key -> first spelling seen, trimmed
    category_names: BTreeMap<String, String>,
    /// Push order; read back in reverse
    announcements: Vec<Arc<Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event into every index.
    ///
    /// Fails with `DuplicateId` if the id is already present, in which case no
    /// index is touched.
    pub fn add_event(&mut self, event: Event) -> CatalogResult<Arc<Event>> {
        if self.by_id.contains_key(&event.id) {
            return Err(CatalogError::DuplicateId(event.id));
        }

        let event = Arc::new(event);
        self.by_id.insert(event.id, Arc::clone(&event));

        let bucket = self.by_date.entry(event.start_date()).or_default();
        let at = bucket.partition_point(|e| canonical_cmp(e, &event).is_lt());
        bucket.insert(at, Arc::clone(&event));

        let category = category_key(&event.category);
        self.by_category
            .entry(category.clone())
            .or_default()
            .insert(event.order_key(), Arc::clone(&event));
        self.category_names
            .entry(category)
            .or_insert_with(|| event.category.trim().to_string());

        if event.is_announcement {
            self.announcements.push(Arc::clone(&event));
        }

        debug!(
            id = %event.id,
            category = %event.category,
            date = %event.start_date(),
            "indexed event"
        );

        Ok(event)
    }

    /// All events, by ascending date bucket and canonical order within each.
    ///
    /// The iterator is `Clone`, so a caller can restart it from the beginning
    /// without going back to the store.
    pub fn upcoming_events(&self) -> impl Iterator<Item = &Arc<Event>> + Clone + '_ {
        self.by_date.values().flatten()
    }

    /// Category names, sorted ignoring case.
    pub fn categories(&self) -> Vec<String> {
        self.category_names.values().cloned().collect()
    }

    /// Announcements, most recently added first.
    pub fn announcements(&self) -> impl Iterator<Item = &Arc<Event>> + '_ {
        self.announcements.iter().rev()
    }

    /// Events in `category` (ignoring case), canonical order. Empty if unknown.
    pub fn events_in_category<'a>(
        &'a self,
        category: &str,
    ) -> impl Iterator<Item = &'a Arc<Event>> + use<'a> {
        self.by_category
            .get(&category_key(category))
            .into_iter()
            .flat_map(|set| set.values())
    }

    /// Events starting on `date`, canonical order. Empty if none.
    pub fn events_on(&self, date: NaiveDate) -> &[Arc<Event>] {
        self.by_date.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, id: &Uuid) -> Option<&Arc<Event>> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
