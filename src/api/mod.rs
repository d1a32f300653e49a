//! Client side of the remote events API.

pub mod client;
pub mod error;
pub mod events;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use events::{CreatedEvent, Event, EventService, NewEvent};
