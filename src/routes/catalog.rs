//! Announcements, categories, recommendations and search history

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use chrono::Local;
use civic_core::{Event, Recommendation, SearchRecord};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(list_announcements))
        .route("/categories", get(list_categories))
        .route("/recommendations", get(list_recommendations))
        .route("/searches/recent", get(recent_searches))
}

/// GET /announcements - Most recently added first
async fn list_announcements(State(state): State<AppState>) -> Json<Vec<Arc<Event>>> {
    Json(state.catalog.announcements())
}

/// GET /categories - Category names, alphabetical
async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}

/// GET /recommendations - Top picks with their scores
async fn list_recommendations(State(state): State<AppState>) -> Json<Vec<Recommendation>> {
    Json(state.catalog.recommend_on(Local::now().date_naive()))
}

/// GET /searches/recent - Most recent first
async fn recent_searches(State(state): State<AppState>) -> Json<Vec<SearchRecord>> {
    Json(state.catalog.recent_searches())
}
