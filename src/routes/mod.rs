pub mod catalog;
pub mod events;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use civic_core::event::non_blank;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(events::router())
        .merge(catalog::router())
        .with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error with the HTTP status it should be reported as
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, error = %self.message, "request rejected");
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Query-string filters shared by the event endpoints.
///
/// Values arrive as raw strings so that an empty form field (`?date=`)
/// means "no filter" instead of a parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct EventQuery {
    pub category: Option<String>,
    pub date: Option<String>,
    pub sort: Option<String>,
}

impl EventQuery {
    pub fn category(&self) -> Option<&str> {
        non_blank(self.category.as_deref())
    }

    pub fn date(&self) -> Result<Option<NaiveDate>, AppError> {
        non_blank(self.date.as_deref())
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                    AppError::bad_request(format!(
                        "Invalid date format '{}'. Expected YYYY-MM-DD",
                        s
                    ))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use civic_core::{Catalog, Event};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::state::AppState;

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    pub fn make_state() -> AppState {
        let catalog = Catalog::new();
        let at = |d: u32, h: u32| day(d).and_hms_opt(h, 0, 0).unwrap();
        catalog
            .extend([
                Event::new("Resurfacing", "Roads", at(10, 8)).announcement(),
                Event::new("Clinic Day", "Health", at(10, 9)).with_tags(["Health"]),
                Event::new("Potholes", "Roads", at(11, 8)),
                Event::new("Art Night", "culture", at(12, 18)),
                Event::new("Water Notice", "Utilities", at(9, 6)).announcement(),
            ])
            .unwrap();
        AppState::with_catalog(catalog)
    }

    pub async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
        let response = super::router(state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    pub fn titles(value: &Value) -> Vec<&str> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect()
    }
}
