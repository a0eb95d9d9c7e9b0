//! doctrans - Document Translation Service Client
//!
//! A Rust client for a document/text/PDF translation service: validates
//! inputs locally, submits them to the backend HTTP API, and renders
//! results, progress, and localized messages in the terminal.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod progress;
pub mod session;
pub mod validate;
pub mod view;
pub mod workflow;
