use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::{error, info, warn};

use super::error::{status_for, PageError};
use super::pages::{render, EventPage, HomePage, NewEventPage};
use super::AppState;
use crate::api::NewEvent;

/// Fields posted by the creation form. Missing fields are empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewEventForm {
    pub title: String,
    pub description: String,
}

/// Handler for the home page
pub async fn home_handler(State(state): State<AppState>) -> Response {
    render(StatusCode::OK, &HomePage::new(&state.locale))
}

/// Handler for the empty creation form
pub async fn new_event_form_handler(State(state): State<AppState>) -> Response {
    render(StatusCode::OK, &NewEventPage::new(&state.locale))
}

/// Handler for creation form submission
pub async fn create_event_handler(
    State(state): State<AppState>,
    Form(form): Form<NewEventForm>,
) -> Response {
    let new_event = NewEvent {
        title: form.title,
        description: form.description,
    };

    let result = state.events.create_event(&new_event).await;
    match result {
        Ok(created) => {
            let location = format!("/events/{}", urlencoding::encode(&created.id));
            Redirect::to(&location).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_client_error() {
                warn!("Event creation rejected: {}", e);
            } else {
                error!("Failed to create event: {}", e);
            }
            let page = NewEventPage::new(&state.locale).with_failure(
                new_event.title,
                new_event.description,
                e.to_string(),
            );
            render(status, &page)
        }
    }
}

/// Handler for the event detail page
pub async fn event_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PageError> {
    match state.events.get_event(&id).await {
        Ok(event) => Ok(render(StatusCode::OK, &EventPage::new(&state.locale, event))),
        Err(e) => {
            info!("Could not show event {}: {}", id, e);
            Err(PageError::from_api(&state.locale, &e))
        }
    }
}

// Handler for health check
pub async fn health_handler() -> &'static str {
    "OK"
}
