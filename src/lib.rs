#[macro_use]
extern crate rust_i18n;

pub mod api;
pub mod config;
pub mod error;
pub mod shutdown;
pub mod startup;
pub mod web;

// Initialize i18n
i18n!("locales", fallback = "en");
