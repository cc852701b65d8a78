//! Recommendations ranked from search history.
//!
//! Every event in a category the user has searched for is a candidate. The
//! score favours categories searched often, events happening soon, and tags
//! that match the most recent search:
//!
//! ```text
//! score = frequency * 15 + max(0, 45 - days_until_start) + tag_bonus
//! tag_bonus = 5 if a tag equals the last searched category
//!           + 3 if a tag equals the last searched date as YYYY-MM
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::event::{Event, SearchRecord, canonical_cmp};
use crate::history::SearchHistory;
use crate::store::EventStore;

/// Maximum number of recommendations returned.
pub const RECOMMENDATION_LIMIT: usize = 3;

const FREQUENCY_WEIGHT: u64 = 15;
const FRESHNESS_WINDOW_DAYS: i64 = 45;
const CATEGORY_TAG_BONUS: u64 = 5;
const MONTH_TAG_BONUS: u64 = 3;

/// A recommended event and the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub event: Arc<Event>,
    /// `None` when the list is the plain upcoming fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

impl Recommendation {
    fn unscored(event: Arc<Event>) -> Self {
        Recommendation { event, score: None }
    }
}

/// Rank up to `RECOMMENDATION_LIMIT` events for a user on `today`.
///
/// Falls back to the first upcoming events when nothing has been searched by
/// category yet, or when none of the searched categories exist in the store.
pub fn recommend(store: &EventStore, history: &SearchHistory, today: NaiveDate) -> Vec<Recommendation> {
    if !history.has_frequencies() {
        return upcoming_fallback(store);
    }

    let latest = history.latest();
    let candidates = history.frequencies().flat_map(|(category, frequency)| {
        store
            .events_in_category(category)
            .map(move |event| (Arc::clone(event), score(event, frequency, latest, today)))
    });

    let ranked = top_k(candidates, RECOMMENDATION_LIMIT);
    if ranked.is_empty() {
        debug!("no candidates in searched categories, using upcoming events");
        return upcoming_fallback(store);
    }

    ranked
}

/// Score one candidate event.
pub fn score(
    event: &Event,
    frequency: u64,
    latest: Option<&SearchRecord>,
    today: NaiveDate,
) -> u64 {
    frequency
        .saturating_mul(FREQUENCY_WEIGHT)
        .saturating_add(freshness(event, today))
        .saturating_add(tag_bonus(event, latest))
}

/// Whole days from `today` until the event's start date, 0 for past events.
pub fn days_until(event: &Event, today: NaiveDate) -> i64 {
    (event.start_date() - today).num_days().max(0)
}

fn freshness(event: &Event, today: NaiveDate) -> u64 {
    (FRESHNESS_WINDOW_DAYS - days_until(event, today)).max(0) as u64
}

fn tag_bonus(event: &Event, latest: Option<&SearchRecord>) -> u64 {
    let Some(latest) = latest else {
        return 0;
    };

    let mut bonus = 0;
    if let Some(category) = &latest.category {
        if event.has_tag(category) {
            bonus += CATEGORY_TAG_BONUS;
        }
    }
    if let Some(month) = latest.month_tag() {
        if event.has_tag(&month) {
            bonus += MONTH_TAG_BONUS;
        }
    }
    bonus
}

/// Highest `k` scores, one entry per event id at its best score.
/// Equal scores fall back to canonical event order.
fn top_k(candidates: impl IntoIterator<Item = (Arc<Event>, u64)>, k: usize) -> Vec<Recommendation> {
    let mut best: HashMap<Uuid, (Arc<Event>, u64)> = HashMap::new();
    for (event, score) in candidates {
        best.entry(event.id)
            .and_modify(|entry| entry.1 = entry.1.max(score))
            .or_insert((event, score));
    }

    let mut ranked: Vec<(Arc<Event>, u64)> = best.into_values().collect();
    ranked.sort_by(|(a, sa), (b, sb)| sb.cmp(sa).then_with(|| canonical_cmp(a, b)));
    ranked.truncate(k);

    ranked
        .into_iter()
        .map(|(event, score)| Recommendation {
            event,
            score: Some(score),
        })
        .collect()
}

fn upcoming_fallback(store: &EventStore) -> Vec<Recommendation> {
    store
        .upcoming_events()
        .take(RECOMMENDATION_LIMIT)
        .cloned()
        .map(Recommendation::unscored)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn days_out(days: i64, hour: u32) -> NaiveDateTime {
        (today() + chrono::Duration::days(days))
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.event.title.as_str()).collect()
    }

    fn make_store() -> EventStore {
        let mut store = EventStore::new();
        for event in [
            Event::new("Water Notice", "Utilities", days_out(1, 6)),
            Event::new("Road Works", "Roads", days_out(1, 8)),
            Event::new("Cleanup", "Community", days_out(2, 9)),
            Event::new("Fitness Morning", "Health", days_out(10, 9)).with_tags(["Wellness"]),
            Event::new("Screening", "Health", days_out(8, 9)).with_tags(["Screening"]),
            Event::new("Parade", "Culture", days_out(20, 19)),
        ] {
            store.add_event(event).unwrap();
        }
        store
    }

    #[test]
    fn test_fallback_before_any_category_search() {
        let store = make_store();
        let mut history = SearchHistory::new();
        history.record(None, Some(today()));

        let recs = recommend(&store, &history, today());
        assert_eq!(titles(&recs), vec!["Water Notice", "Road Works", "Cleanup"]);
        assert!(recs.iter().all(|r| r.score.is_none()));
    }

    #[test]
    fn test_fallback_when_searched_categories_unknown() {
        let store = make_store();
        let mut history = SearchHistory::new();
        history.record(Some("Nonexistent"), None);

        let recs = recommend(&store, &history, today());
        assert_eq!(titles(&recs), vec!["Water Notice", "Road Works", "Cleanup"]);
    }

    #[test]
    fn test_nearer_event_ranks_first() {
        let store = make_store();
        let mut history = SearchHistory::new();
        for _ in 0..3 {
            history.record(Some("Health"), None);
        }

        let recs = recommend(&store, &history, today());
        assert_eq!(titles(&recs), vec!["Screening", "Fitness Morning"]);
        // 3 * 15 + (45 - 8), then 3 * 15 + (45 - 10)
        assert_eq!(recs[0].score, Some(82));
        assert_eq!(recs[1].score, Some(80));
    }

    #[test]
    fn test_frequency_outweighs_freshness() {
        let store = make_store();
        let mut history = SearchHistory::new();
        history.record(Some("Roads"), None);
        history.record(Some("Culture"), None);
        history.record(Some("Culture"), None);

        let recs = recommend(&store, &history, today());
        // Parade: 30 + 25 = 55; Road Works: 15 + 44 = 59
        assert_eq!(titles(&recs), vec!["Road Works", "Parade"]);
    }

    #[test]
    fn test_tag_bonus_from_latest_search() {
        let event = Event::new("Screening", "Health", days_out(8, 9)).with_tags(["health", "2025-01"]);
        let latest = SearchRecord::new(Some("Health".into()), Some(today()));

        assert_eq!(tag_bonus(&event, Some(&latest)), 8);
        assert_eq!(tag_bonus(&event, Some(&SearchRecord::new(None, None))), 0);
        assert_eq!(tag_bonus(&event, None), 0);
    }

    #[test]
    fn test_score_saturates_on_huge_frequency() {
        let event = Event::new("Screening", "Health", days_out(8, 9)).with_tags(["Health"]);
        let latest = SearchRecord::new(Some("Health".into()), None);

        assert_eq!(score(&event, u64::MAX, Some(&latest), today()), u64::MAX);
        // u64::MAX is a multiple of 15, so the freshness term is what overflows
        assert_eq!(score(&event, u64::MAX / 15, None, today()), u64::MAX);
    }

    #[test]
    fn test_freshness_clamped() {
        let past = Event::new("Past", "X", days_out(-3, 9));
        let far = Event::new("Far", "X", days_out(90, 9));

        assert_eq!(days_until(&past, today()), 0);
        assert_eq!(freshness(&past, today()), 45);
        assert_eq!(freshness(&far, today()), 0);
    }

    #[test]
    fn test_top_k_deduplicates_keeping_best_score() {
        let shared = Arc::new(Event::new("Shared", "Roads", days_out(3, 9)));
        let other = Arc::new(Event::new("Other", "Health", days_out(4, 9)));

        let ranked = top_k(
            vec![
                (Arc::clone(&shared), 40),
                (Arc::clone(&other), 50),
                (Arc::clone(&shared), 60),
            ],
            RECOMMENDATION_LIMIT,
        );

        assert_eq!(titles(&ranked), vec!["Shared", "Other"]);
        assert_eq!(ranked[0].score, Some(60));
    }

    #[test]
    fn test_top_k_ties_follow_canonical_order() {
        let a = Arc::new(Event::new("B Later", "X", days_out(5, 9)));
        let b = Arc::new(Event::new("A Earlier", "X", days_out(2, 9)));
        let c = Arc::new(Event::new("C Same Day", "X", days_out(2, 9)));
        let d = Arc::new(Event::new("D Lowest", "X", days_out(1, 9)));

        let ranked = top_k(vec![(a, 10), (b, 10), (c, 10), (d, 5)], 3);
        assert_eq!(titles(&ranked), vec!["A Earlier", "C Same Day", "B Later"]);
    }
}
