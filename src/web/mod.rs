//! Server-rendered pages.

pub mod error;
pub mod handlers;
pub mod pages;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::api::EventService;
use handlers::{
    create_event_handler, event_detail_handler, health_handler, home_handler,
    new_event_form_handler,
};

pub use error::PageError;

#[derive(Clone)]
pub struct AppState {
    /// Backend the pages read and create events through
    pub events: Arc<dyn EventService>,
    /// Locale used for page strings
    pub locale: String,
}

impl AppState {
    pub fn new(events: Arc<dyn EventService>, locale: impl Into<String>) -> Self {
        Self {
            events,
            locale: locale.into(),
        }
    }
}

/// Build the router serving every page
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        // The static segment wins: an event whose id is `new` is not reachable here
        .route("/events/new", get(new_event_form_handler).post(create_event_handler))
        .route("/events/{id}", get(event_detail_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
