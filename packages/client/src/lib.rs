//! # Client crate — cache, mutations, and session for the Tandem UI
//!
//! This crate is the layer between the HTTP boundary ([`api`]) and the UI.
//! Nothing here renders; everything here decides *when* to talk to the
//! server and what local state results.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`keys`] | Typed query keys and the filters mutations invalidate by |
//! | [`cache`] | Key-addressed query cache: staleness, retention, retry, in-flight dedup |
//! | [`mutation`] | Every write operation as data: which keys it invalidates, what notice it emits |
//! | [`session`] | Authentication state with persisted session record, login/register/logout/rehydrate |
//! | [`notify`] | Fan-out notices (success/error toasts) published by the mutation runner |
//! | [`config`] | Client configuration (`tandem.toml`) |
//! | [`app`] | [`AppClient`] — owns one of each and exposes the per-resource operations |
//!
//! Per-resource read and write operations live in sibling modules
//! (`goals`, `circles`, `buddies`, `feed`, `users`) as methods on
//! [`AppClient`].

pub mod app;
pub mod cache;
pub mod config;
pub mod keys;
pub mod mutation;
pub mod notify;
pub mod session;

mod buddies;
mod circles;
mod clock;
mod feed;
mod goals;
mod users;

pub use api::FeedScope;
pub use app::AppClient;
pub use cache::{CacheConfig, QueryCache};
pub use config::ClientConfig;
pub use keys::{KeyFilter, QueryKey, RequestDirection};
pub use mutation::MutationKind;
pub use notify::{Notice, NoticeLevel, Notifier};
pub use session::{AuthBackend, AuthStore, Session, SessionRecord, SESSION_KEY};
