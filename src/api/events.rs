use async_trait::async_trait;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::client::{decode_json, ApiClient, RequestOptions};
use super::error::ApiError;

/// Path of the events collection on the remote API
pub const EVENTS_PATH: &str = "/api/events";

/// An event as stored by the remote API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Server-assigned identifier
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Payload sent to create an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
}

/// The part of a creation response the front-end relies on
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
}

/// Path of a single event, with the id encoded as one path segment
pub fn event_path(id: &str) -> String {
    format!("{}/{}", EVENTS_PATH, urlencoding::encode(id))
}

/// Operations the pages need from the events backend
#[async_trait]
pub trait EventService: Send + Sync + 'static {
    /// Fetch one event, bypassing any cache
    async fn get_event(&self, id: &str) -> Result<Event, ApiError>;

    /// Create an event and return its server-assigned id
    async fn create_event(&self, event: &NewEvent) -> Result<CreatedEvent, ApiError>;
}

#[async_trait]
impl EventService for ApiClient {
    async fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        let options = RequestOptions::new(Method::GET)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        let response = self.send(&event_path(id), options).await?;

        let status = response.status();
        if !status.is_success() {
            info!("Event {} not available (HTTP {})", id, status.as_u16());
            return Err(ApiError::NotFound { status });
        }

        decode_json(response).await
    }

    async fn create_event(&self, event: &NewEvent) -> Result<CreatedEvent, ApiError> {
        let body = json!({
            "title": event.title,
            "description": event.description,
        })
        .to_string();
        let created: CreatedEvent = self
            .call(EVENTS_PATH, RequestOptions::new(Method::POST).body(body))
            .await?;

        info!("Created event {}", created.id);
        Ok(created)
    }
}
