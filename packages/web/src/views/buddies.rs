//! Buddies: the list, incoming and outgoing requests, and user search.

use api::forms::BuddyRequestForm;
use client::RequestDirection;
use dioxus::prelude::*;
use ui::use_app;
use validator::Validate;

#[component]
pub fn Buddies() -> Element {
    rsx! {
        div {
            class: "buddies-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            h2 { "Buddies" }
            BuddyList {}
            ReceivedRequests {}
            SentRequests {}
            BuddySearch {}
        }
    }
}

#[component]
fn BuddyList() -> Element {
    let app = use_app();

    let list_app = app.clone();
    let mut buddies = use_resource(move || {
        let app = list_app.clone();
        async move { app.buddies().await }
    });

    let on_remove = use_callback(move |user_id: i64| {
        let app = app.clone();
        spawn(async move {
            if app.remove_buddy(user_id).await.is_ok() {
                buddies.restart();
            }
        });
    });

    rsx! {
        match &*buddies.read_unchecked() {
            Some(Ok(buddies)) if buddies.is_empty() => rsx! {
                p { style: "color: #787774;", "No buddies yet. Find someone to keep you honest." }
            },
            Some(Ok(buddies)) => rsx! {
                ul {
                    style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.25rem;",
                    for buddy in buddies.clone() {
                        li {
                            key: "{buddy.user_id}",
                            style: "display: flex; justify-content: space-between; align-items: center;",
                            span { "{buddy.username}" }
                            button {
                                onclick: move |_| on_remove.call(buddy.user_id),
                                "Remove"
                            }
                        }
                    }
                }
            },
            Some(Err(err)) => rsx! {
                p { class: "form-error", style: "color: #c4314b;", "{err}" }
            },
            None => rsx! {
                p { style: "color: #787774;", "Loading buddies..." }
            },
        }
    }
}

#[component]
fn ReceivedRequests() -> Element {
    let app = use_app();

    let list_app = app.clone();
    let mut requests = use_resource(move || {
        let app = list_app.clone();
        async move { app.buddy_requests(RequestDirection::Received).await }
    });

    let accept_app = app.clone();
    let on_accept = use_callback(move |request_id: i64| {
        let app = accept_app.clone();
        spawn(async move {
            if app.accept_buddy_request(request_id).await.is_ok() {
                requests.restart();
            }
        });
    });

    let on_decline = use_callback(move |request_id: i64| {
        let app = app.clone();
        spawn(async move {
            if app.decline_buddy_request(request_id).await.is_ok() {
                requests.restart();
            }
        });
    });

    rsx! {
        div {
            style: "margin-top: 1.5rem;",
            h3 { "Requests for you" }
            match &*requests.read_unchecked() {
                Some(Ok(requests)) if requests.is_empty() => rsx! {
                    p { style: "color: #787774;", "No pending requests." }
                },
                Some(Ok(requests)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for request in requests.clone() {
                            li {
                                key: "{request.id}",
                                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 0.75rem;",
                                span { style: "font-weight: 600;", "{request.requester_username}" }
                                if let Some(message) = &request.message {
                                    p { style: "margin: 0.25rem 0; color: #787774;", "\"{message}\"" }
                                }
                                div {
                                    style: "display: flex; gap: 0.5rem; margin-top: 0.5rem;",
                                    button {
                                        class: "primary",
                                        onclick: move |_| on_accept.call(request.id),
                                        "Accept"
                                    }
                                    button {
                                        onclick: move |_| on_decline.call(request.id),
                                        "Decline"
                                    }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading requests..." }
                },
            }
        }
    }
}

#[component]
fn SentRequests() -> Element {
    let app = use_app();
    let requests = use_resource(move || {
        let app = app.clone();
        async move { app.buddy_requests(RequestDirection::Sent).await }
    });

    rsx! {
        div {
            style: "margin-top: 1.5rem;",
            h3 { "Requests you sent" }
            match &*requests.read_unchecked() {
                Some(Ok(requests)) if requests.is_empty() => rsx! {
                    p { style: "color: #787774;", "None outstanding." }
                },
                Some(Ok(requests)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0;",
                        for request in requests.clone() {
                            li {
                                key: "{request.id}",
                                "{request.receiver_username}"
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading..." }
                },
            }
        }
    }
}

#[component]
fn BuddySearch() -> Element {
    let app = use_app();
    let mut query = use_signal(String::new);
    let mut message = use_signal(String::new);

    let search_app = app.clone();
    let results = use_resource(move || {
        let app = search_app.clone();
        let query = query();
        async move { app.search_users(&query).await }
    });

    let notifier = app.notifier.clone();
    let on_send = use_callback(move |user_id: i64| {
        let form = BuddyRequestForm { message: message() };
        if form.validate().is_err() {
            notifier.error("Message must be 256 characters or less");
            return;
        }
        let app = app.clone();
        spawn(async move {
            let note = message();
            let note = note.trim();
            let note = if note.is_empty() { None } else { Some(note) };
            if app.send_buddy_request(user_id, note).await.is_ok() {
                query.set(String::new());
                message.set(String::new());
            }
        });
    });

    rsx! {
        div {
            style: "margin-top: 1.5rem;",
            h3 { "Find a buddy" }

            input {
                r#type: "text",
                placeholder: "Search by username...",
                value: query(),
                oninput: move |evt| query.set(evt.value()),
            }
            input {
                r#type: "text",
                placeholder: "Say hi (optional)",
                value: message(),
                oninput: move |evt| message.set(evt.value()),
            }

            if !query().trim().is_empty() {
                match &*results.read_unchecked() {
                    Some(Ok(users)) if users.is_empty() => rsx! {
                        p { style: "color: #787774;", "No users found." }
                    },
                    Some(Ok(users)) => rsx! {
                        ul {
                            style: "list-style: none; padding: 0;",
                            for user in users.clone() {
                                li {
                                    key: "{user.id}",
                                    style: "display: flex; justify-content: space-between; align-items: center;",
                                    span { "{user.username}" }
                                    button {
                                        onclick: move |_| on_send.call(user.id),
                                        "Send request"
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        p { class: "form-error", style: "color: #c4314b;", "{err}" }
                    },
                    None => rsx! {
                        p { style: "color: #787774;", "Searching..." }
                    },
                }
            }
        }
    }
}
