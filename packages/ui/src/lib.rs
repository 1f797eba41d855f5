//! Shared UI for the workspace: the application/session/toast providers
//! every platform crate wraps its router in, plus common chrome.

mod app;
pub use app::{use_app, AppHandle, AppProvider, PlatformStore};

mod auth;
pub use auth::{use_session, AuthProvider};

mod toast;
pub use toast::{use_toasts, Toast, ToastProvider};

mod navbar;
pub use navbar::Navbar;
