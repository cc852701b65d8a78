//! Event listing and search endpoints

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::NaiveDate;
use civic_core::{Event, SearchRecord, SortOrder};
use serde::Serialize;
use uuid::Uuid;

use crate::routes::{AppError, EventQuery};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(events_page))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/search", get(search_events))
        .route("/events/{id}", get(get_event))
}

#[derive(Serialize)]
pub struct SortOption {
    pub value: SortOrder,
    pub label: &'static str,
}

/// Everything the local events page shows, in one response
#[derive(Serialize)]
pub struct EventsPage {
    pub categories: Vec<String>,
    pub upcoming_events: Vec<Arc<Event>>,
    pub announcements: Vec<Arc<Event>>,
    pub search_results: Vec<Arc<Event>>,
    pub recommendations: Vec<Arc<Event>>,
    pub recent_searches: Vec<SearchRecord>,
    pub selected_category: Option<String>,
    pub selected_date: Option<NaiveDate>,
    pub sort_options: Vec<SortOption>,
    pub selected_sort: SortOrder,
    pub has_searched: bool,
}

/// GET /events - Page view: search (only when filtered), listings, recommendations
async fn events_page(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<Json<EventsPage>, AppError> {
    let catalog = &state.catalog;
    let category = query.category();
    let date = query.date()?;
    let sort = SortOrder::parse_lenient(query.sort.as_deref());
    let has_searched = category.is_some() || date.is_some();

    // Search first so the recommendations below already reflect it
    let mut search_results = if has_searched {
        catalog.search(category, date)
    } else {
        Vec::new()
    };
    sort.apply(&mut search_results);

    let mut upcoming_events = catalog.upcoming_events();
    sort.apply(&mut upcoming_events);

    Ok(Json(EventsPage {
        categories: catalog.categories(),
        upcoming_events,
        announcements: catalog.announcements(),
        search_results,
        recommendations: catalog.recommend(),
        recent_searches: catalog.recent_searches(),
        selected_category: category.map(str::to_string),
        selected_date: date,
        sort_options: SortOrder::ALL
            .into_iter()
            .map(|value| SortOption {
                value,
                label: value.label(),
            })
            .collect(),
        selected_sort: sort,
        has_searched,
    }))
}

/// GET /events/upcoming - All events, chronological unless ?sort= says otherwise
async fn upcoming_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Json<Vec<Arc<Event>>> {
    let mut events = state.catalog.upcoming_events();
    SortOrder::parse_lenient(query.sort.as_deref()).apply(&mut events);
    Json(events)
}

/// GET /events/search - Filter by category and/or date; always recorded in history
async fn search_events(
    State(state): State<AppState>,
    Query(query): Query<EventQuery>,
) -> Result<Json<Vec<Arc<Event>>>, AppError> {
    let date = query.date()?;
    let mut events = state.catalog.search(query.category(), date);
    SortOrder::parse_lenient(query.sort.as_deref()).apply(&mut events);
    Ok(Json(events))
}

/// GET /events/{id} - A single event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Arc<Event>>, AppError> {
    state
        .catalog
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::not_found(format!("Event not found: {}", id)))
}
