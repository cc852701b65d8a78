//! Local event and announcement types.
//!
//! An `Event` is an immutable value once it enters the catalog: the store
//! wraps it in an `Arc` and every index shares that same allocation.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// A municipal event or announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    /// Free-text label, compared case-insensitively
    pub category: String,
    /// Local wall-clock start
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub location: String,
    pub description: String,
    pub tags: BTreeSet<String>,
    /// Announcements are also listed on the announcement stack
    pub is_announcement: bool,
}

impl Event {
    /// Create an event with a fresh id and empty optional fields.
    pub fn new(title: impl Into<String>, category: impl Into<String>, start: NaiveDateTime) -> Self {
        Event {
            id: Uuid::new_v4(),
            title: title.into(),
            category: category.into(),
            start,
            end: None,
            location: String::new(),
            description: String::new(),
            tags: BTreeSet::new(),
            is_announcement: false,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn announcement(mut self) -> Self {
        self.is_announcement = true;
        self
    }

    /// Calendar date the event starts on (the by-date index key).
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether any tag equals `needle`, ignoring case.
    pub fn has_tag(&self, needle: &str) -> bool {
        let needle = fold_case(needle);
        self.tags.iter().any(|tag| fold_case(tag) == needle)
    }

    /// Key that sorts events in canonical order.
    pub fn order_key(&self) -> OrderKey {
        OrderKey {
            start: self.start,
            title: fold_case(&self.title),
            id: self.id,
        }
    }
}

/// Canonical event order: start time, then title ignoring case, then id.
///
/// The id component makes the order total, so two distinct events never
/// compare equal even when start and title coincide.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderKey {
    start: NaiveDateTime,
    title: String,
    id: Uuid,
}

/// Compare two events in canonical order.
pub fn canonical_cmp(a: &Event, b: &Event) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| fold_case(&a.title).cmp(&fold_case(&b.title)))
        .then_with(|| a.id.cmp(&b.id))
}

/// One past query against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRecord {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl SearchRecord {
    pub fn new(category: Option<String>, date: Option<NaiveDate>) -> Self {
        SearchRecord { category, date }
    }

    /// The record's date rendered as a month tag (`YYYY-MM`).
    pub fn month_tag(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m").to_string())
    }
}

/// Case-folded form used for every case-insensitive key.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Index key for a category: surrounding whitespace dropped, case folded.
pub fn category_key(category: &str) -> String {
    fold_case(category.trim())
}

/// Trim a query value, treating blank input as absent.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
