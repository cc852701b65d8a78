//! Filtered lookups over the store's indices.
//!
//! These functions only read. Recording the query into the history is the
//! catalog's job, and it does that before calling in here.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::event::{Event, non_blank};
use crate::store::EventStore;

/// Number of events returned when a search carries no filter.
pub const BROWSE_LIMIT: usize = 6;

/// Answer a search from the indices.
///
/// - no filter: the first `BROWSE_LIMIT` upcoming events
/// - category only: every event in that category
/// - date only: every event starting that day
/// - both: events present in both the category set and the date bucket
///
/// Unknown categories and empty dates give an empty result. The combined
/// filter never falls back to one side when the other misses.
pub fn search(
    store: &EventStore,
    category: Option<&str>,
    date: Option<NaiveDate>,
) -> Vec<Arc<Event>> {
    let category = non_blank(category);

    match (category, date) {
        (None, None) => store
            .upcoming_events()
            .take(BROWSE_LIMIT)
            .cloned()
            .collect(),
        (Some(category), None) => store.events_in_category(category).cloned().collect(),
        (None, Some(date)) => store.events_on(date).to_vec(),
        (Some(category), Some(date)) => intersect(store, category, date),
    }
}

/// Category set ∩ date bucket, by id, in canonical order.
fn intersect(store: &EventStore, category: &str, date: NaiveDate) -> Vec<Arc<Event>> {
    let on_date = store.events_on(date);
    if on_date.is_empty() {
        return Vec::new();
    }

    let ids: HashSet<Uuid> = on_date.iter().map(|e| e.id).collect();
    store
        .events_in_category(category)
        .filter(|e| ids.contains(&e.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn at(d: u32, hour: u32) -> NaiveDateTime {
        day(d).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn titles(events: &[Arc<Event>]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    fn make_store() -> EventStore {
        let mut store = EventStore::new();
        for event in [
            Event::new("Resurfacing Ward 12", "Roads", at(10, 8)),
            Event::new("Pothole Blitz", "Roads", at(11, 8)),
            Event::new("Clinic Day", "Health", at(10, 9)),
            Event::new("Water Outage", "Utilities", at(10, 6)),
            Event::new("Career Fair", "Education", at(12, 11)),
            Event::new("Story Time", "Culture", at(13, 10)),
            Event::new("Art Night", "Culture", at(14, 18)),
            Event::new("Parade", "Culture", at(20, 19)),
        ] {
            store.add_event(event).unwrap();
        }
        store
    }

    #[test]
    fn test_no_filter_returns_first_six_upcoming() {
        let store = make_store();
        let results = search(&store, None, None);

        assert_eq!(results.len(), BROWSE_LIMIT);
        assert_eq!(
            titles(&results),
            vec![
                "Water Outage",
                "Resurfacing Ward 12",
                "Clinic Day",
                "Pothole Blitz",
                "Career Fair",
                "Story Time"
            ]
        );
    }

    #[test]
    fn test_no_filter_on_small_store_returns_everything() {
        let mut store = EventStore::new();
        store.add_event(Event::new("Only", "Roads", at(3, 9))).unwrap();

        assert_eq!(search(&store, None, None).len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let store = make_store();
        assert_eq!(
            titles(&search(&store, Some("culture"), None)),
            vec!["Story Time", "Art Night", "Parade"]
        );
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let store = make_store();
        assert!(search(&store, Some("Nonexistent"), None).is_empty());
    }

    #[test]
    fn test_date_filter() {
        let store = make_store();
        assert_eq!(
            titles(&search(&store, None, Some(day(10)))),
            vec!["Water Outage", "Resurfacing Ward 12", "Clinic Day"]
        );
        assert!(search(&store, None, Some(day(1))).is_empty());
    }

    #[test]
    fn test_combined_filter_is_intersection() {
        let store = make_store();
        assert_eq!(
            titles(&search(&store, Some("Roads"), Some(day(10)))),
            vec!["Resurfacing Ward 12"]
        );
    }

    #[test]
    fn test_combined_filter_misses_are_empty_not_one_sided() {
        let store = make_store();
        // Date has events, category unknown
        assert!(search(&store, Some("Nonexistent"), Some(day(10))).is_empty());
        // Category known, date empty
        assert!(search(&store, Some("Roads"), Some(day(1))).is_empty());
        // Both known, no overlap
        assert!(search(&store, Some("Culture"), Some(day(10))).is_empty());
    }

    #[test]
    fn test_blank_category_means_no_category_filter() {
        let store = make_store();
        assert_eq!(
            search(&store, Some("  "), Some(day(10))),
            search(&store, None, Some(day(10)))
        );
    }

    #[test]
    fn test_every_event_reachable_by_its_own_keys() {
        let store = make_store();
        for event in store.upcoming_events() {
            let hits = search(&store, Some(event.category.as_str()), Some(event.start_date()));
            assert_eq!(hits.iter().filter(|e| e.id == event.id).count(), 1);
        }
    }
}
