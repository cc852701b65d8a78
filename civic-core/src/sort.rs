//! Presentation ordering chosen by the user.
//!
//! The catalog always answers in canonical order. Pages may re-sort what they
//! get back by date, category or name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::event::{Event, category_key, fold_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Date,
    Category,
    Name,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Date, SortOrder::Category, SortOrder::Name];

    /// Parse a user-supplied value. Blank or unknown values mean `Date`.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Date => "date",
            SortOrder::Category => "category",
            SortOrder::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Date => "Date",
            SortOrder::Category => "Category",
            SortOrder::Name => "Name",
        }
    }

    /// Sort events in place. The sort is stable.
    pub fn apply(&self, events: &mut [Arc<Event>]) {
        match self {
            SortOrder::Date => events.sort_by(|a, b| {
                a.start
                    .cmp(&b.start)
                    .then_with(|| fold_case(&a.title).cmp(&fold_case(&b.title)))
            }),
            SortOrder::Category => events.sort_by(|a, b| {
                category_key(&a.category)
                    .cmp(&category_key(&b.category))
                    .then_with(|| a.start.cmp(&b.start))
            }),
            SortOrder::Name => events.sort_by(|a, b| {
                fold_case(&a.title)
                    .cmp(&fold_case(&b.title))
                    .then_with(|| a.start.cmp(&b.start))
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown sort order '{}'. Expected date, category or name", s))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
