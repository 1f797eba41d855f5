//! Toast notices.
//!
//! [`ToastProvider`] subscribes to the application client's notifier and
//! renders whatever arrives; mutations never talk to the toast layer
//! directly. Clicking a toast dismisses it.

use client::{Notice, NoticeLevel};
use dioxus::prelude::*;

use crate::app::use_app;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

pub fn use_toasts() -> Signal<Vec<Toast>> {
    use_context::<Signal<Vec<Toast>>>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let app = use_app();
    let mut toasts = use_signal(Vec::<Toast>::new);
    use_context_provider(|| toasts);

    use_hook(move || {
        let mut rx = app.notifier.subscribe();
        spawn(async move {
            let mut next_id = 0u64;
            while let Some(notice) = rx.recv().await {
                next_id += 1;
                toasts.write().push(Toast {
                    id: next_id,
                    notice,
                });
            }
        });
    });

    rsx! {
        {children}
        ToastViewport {}
    }
}

#[component]
fn ToastViewport() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        div {
            class: "toast-viewport",
            style: "position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 100;",

            for toast in toasts() {
                {
                    let id = toast.id;
                    let background = match toast.notice.level {
                        NoticeLevel::Success => "#0f7b55",
                        NoticeLevel::Error => "#c4314b",
                        NoticeLevel::Info => "#37352f",
                    };
                    rsx! {
                        div {
                            key: "{id}",
                            class: "toast",
                            style: "padding: 0.625rem 1rem; border-radius: 4px; color: white; cursor: pointer; font-size: 0.9375rem; background: {background};",
                            onclick: move |_| toasts.write().retain(|t| t.id != id),
                            "{toast.notice.message}"
                        }
                    }
                }
            }
        }
    }
}
