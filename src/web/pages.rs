use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use rust_i18n::t;
use tracing::error;

use crate::api::Event;

/// Strings shared by every page
#[derive(Debug, Clone)]
pub struct Layout {
    pub lang: String,
    pub app_title: String,
    pub back_home: String,
}

impl Layout {
    pub fn new(locale: &str) -> Self {
        Self {
            lang: locale.to_string(),
            app_title: t!("app_title", locale = locale).into_owned(),
            back_home: t!("back_home", locale = locale).into_owned(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub layout: Layout,
    pub heading: String,
    pub create_link: String,
}

impl HomePage {
    pub fn new(locale: &str) -> Self {
        Self {
            layout: Layout::new(locale),
            heading: t!("home_heading", locale = locale).into_owned(),
            create_link: t!("home_create_link", locale = locale).into_owned(),
        }
    }
}

/// Creation form, optionally refilled after a failed submission
#[derive(Template)]
#[template(path = "new_event.html")]
pub struct NewEventPage {
    pub layout: Layout,
    pub heading: String,
    pub title_placeholder: String,
    pub description_placeholder: String,
    pub submit_label: String,
    pub error_heading: String,
    pub title: String,
    pub description: String,
    pub error: Option<String>,
}

impl NewEventPage {
    pub fn new(locale: &str) -> Self {
        Self {
            layout: Layout::new(locale),
            heading: t!("new_event_heading", locale = locale).into_owned(),
            title_placeholder: t!("form_title_placeholder", locale = locale).into_owned(),
            description_placeholder: t!("form_description_placeholder", locale = locale)
                .into_owned(),
            submit_label: t!("form_submit", locale = locale).into_owned(),
            error_heading: t!("form_error_heading", locale = locale).into_owned(),
            title: String::new(),
            description: String::new(),
            error: None,
        }
    }

    /// Keep the submitted values and show why the submission failed
    pub fn with_failure(mut self, title: String, description: String, error: String) -> Self {
        self.title = title;
        self.description = description;
        self.error = Some(error);
        self
    }
}

#[derive(Template)]
#[template(path = "event.html")]
pub struct EventPage {
    pub layout: Layout,
    pub event: Event,
}

impl EventPage {
    pub fn new(locale: &str, event: Event) -> Self {
        Self {
            layout: Layout::new(locale),
            event,
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub layout: Layout,
    pub heading: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(locale: &str, message: String) -> Self {
        Self {
            layout: Layout::new(locale),
            heading: t!("error_heading", locale = locale).into_owned(),
            message,
        }
    }
}

/// Render a page with the given status, falling back to plain text if rendering fails
pub fn render<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
        }
    }
}
