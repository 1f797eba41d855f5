//! Session context for the UI.
//!
//! [`AuthProvider`] rehydrates the persisted session before rendering its
//! children, so route guards never see a pre-rehydration "logged out"
//! state. Views mutate the session through the application client and then
//! push the new snapshot into the signal returned by [`use_session`].

use client::Session;
use dioxus::prelude::*;

use crate::app::use_app;

/// Current session state; updates on login, logout and rehydration.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal and runs rehydration
/// on mount. Children render only after rehydration has completed.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let app = use_app();
    let mut session = use_signal(Session::default);
    use_context_provider(|| session);

    let _rehydration = use_resource(move || {
        let app = app.clone();
        async move {
            app.auth.rehydrate().await;
            session.set(app.auth.snapshot());
        }
    });

    if session().is_loading {
        return rsx! {
            div {
                class: "auth-loading",
                style: "display: flex; align-items: center; justify-content: center; min-height: 100vh; color: #787774;",
                "Loading..."
            }
        };
    }

    rsx! {
        {children}
    }
}
