//! Search history: a bounded FIFO of past queries and a per-category tally.

use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;

use crate::event::{SearchRecord, category_key, non_blank};

/// Number of past searches kept.
pub const HISTORY_CAPACITY: usize = 8;

#[derive(Debug, Clone)]
pub struct SearchHistory {
    capacity: usize,
    recent: VecDeque<SearchRecord>,
    /// Category key -> number of searches that filtered on it
    frequency: BTreeMap<String, u64>,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SearchHistory {
            capacity,
            recent: VecDeque::with_capacity(capacity + 1),
            frequency: BTreeMap::new(),
        }
    }

    /// Record one search. A blank category is stored as absent and does not
    /// count towards the frequency tally.
    pub fn record(&mut self, category: Option<&str>, date: Option<NaiveDate>) {
        let category = non_blank(category);

        self.recent
            .push_back(SearchRecord::new(category.map(str::to_string), date));
        if self.recent.len() > self.capacity {
            self.recent.pop_front();
        }

        if let Some(category) = category {
            let count = self.frequency.entry(category_key(category)).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    /// Past searches, most recent first.
    pub fn recent_searches(&self) -> Vec<SearchRecord> {
        self.recent.iter().rev().cloned().collect()
    }

    /// The most recent search, if any.
    pub fn latest(&self) -> Option<&SearchRecord> {
        self.recent.back()
    }

    /// How many searches have filtered on `category` (ignoring case).
    pub fn frequency(&self, category: &str) -> u64 {
        self.frequency.get(&category_key(category)).copied().unwrap_or(0)
    }

    /// Every searched category key with its count, in key order.
    pub fn frequencies(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.frequency.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn has_frequencies(&self) -> bool {
        !self.frequency.is_empty()
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}
