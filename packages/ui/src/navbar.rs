//! Top navigation bar shared by the authenticated views.

use dioxus::prelude::*;

use crate::auth::use_session;

#[component]
pub fn Navbar(children: Element, on_logout: EventHandler<()>) -> Element {
    let session = use_session();
    let username = session()
        .user
        .map(|user| user.username)
        .unwrap_or_default();

    rsx! {
        div {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 1rem; padding: 0.5rem 1rem; border-bottom: 1px solid #e0e0e0;",

            span {
                class: "navbar-brand",
                style: "font-weight: 700;",
                "Tandem"
            }

            {children}

            div {
                style: "margin-left: auto; display: flex; align-items: center; gap: 0.75rem;",
                span {
                    class: "navbar-user",
                    style: "color: #787774; font-size: 0.9375rem;",
                    "{username}"
                }
                button {
                    class: "navbar-logout",
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }
        }
    }
}
