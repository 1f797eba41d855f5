//! # API crate — the HTTP boundary of the Tandem client
//!
//! Everything that crosses the wire lives here:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Entity types as the server serves them (users, goals, check-ins, circles, buddies, feed items) plus the write payloads |
//! | [`forms`] | Form validation: field-scoped error messages produced locally, before any request is made |
//! | [`client`] | [`ApiClient`] — the single configured request sender with bearer-token attachment and uniform error extraction |
//!
//! Per-resource endpoint methods ([`ApiClient::login`],
//! [`ApiClient::list_goals`], ...) are grouped into sibling modules by
//! resource and are the only call sites of the HTTP verbs.

pub mod client;
pub mod forms;
pub mod models;

mod auth;
mod buddies;
mod circles;
mod feed;
mod goals;
mod users;

pub use client::{ApiClient, ApiError};
pub use feed::FeedScope;
pub use models::*;
