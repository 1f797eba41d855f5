//! Single circle: members, leaderboard, chat.

use api::forms::CircleMessageForm;
use dioxus::prelude::*;
use ui::{use_app, use_session};
use validator::{Validate, ValidationErrors};

use crate::views::field_message;
use crate::Route;

#[component]
pub fn CircleDetail(circle_id: i64) -> Element {
    let app = use_app();
    let session = use_session();
    let nav = use_navigator();

    let circle_app = app.clone();
    let circle = use_resource(move || {
        let app = circle_app.clone();
        async move { app.circle(circle_id).await }
    });

    let delete_app = app.clone();
    let on_delete = move |_| {
        let app = delete_app.clone();
        spawn(async move {
            if app.delete_circle(circle_id).await.is_ok() {
                nav.replace(Route::Circles {});
            }
        });
    };

    let user_id = session().user.map(|user| user.id);

    rsx! {
        div {
            class: "circle-detail-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            match &*circle.read_unchecked() {
                Some(Ok(circle)) => rsx! {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: baseline;",
                        h2 { "{circle.name}" }
                        if user_id == Some(circle.created_by) {
                            button {
                                class: "danger",
                                onclick: on_delete,
                                "Delete circle"
                            }
                        }
                    }
                    if let Some(description) = &circle.description {
                        p { style: "color: #787774;", "{description}" }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading circle..." }
                },
            }

            MemberList { circle_id }
            Leaderboard { circle_id }
            MessageBoard { circle_id }
        }
    }
}

#[component]
fn MemberList(circle_id: i64) -> Element {
    let app = use_app();
    let mut search = use_signal(String::new);

    let members_app = app.clone();
    let mut members = use_resource(move || {
        let app = members_app.clone();
        async move { app.circle_members(circle_id).await }
    });

    let search_app = app.clone();
    let candidates = use_resource(move || {
        let app = search_app.clone();
        let query = search();
        async move { app.search_users(&query).await }
    });

    let add_app = app.clone();
    let on_add = use_callback(move |user_id: i64| {
        let app = add_app.clone();
        spawn(async move {
            if app.add_circle_member(circle_id, user_id).await.is_ok() {
                search.set(String::new());
                members.restart();
            }
        });
    });

    let remove_app = app;
    let on_remove = use_callback(move |user_id: i64| {
        let app = remove_app.clone();
        spawn(async move {
            if app.remove_circle_member(circle_id, user_id).await.is_ok() {
                members.restart();
            }
        });
    });

    rsx! {
        div {
            class: "circle-members",
            style: "margin-top: 1.5rem;",

            h3 { "Members" }
            match &*members.read_unchecked() {
                Some(Ok(members)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.25rem;",
                        for member in members.clone() {
                            li {
                                key: "{member.user_id}",
                                style: "display: flex; justify-content: space-between; align-items: center;",
                                span { "{member.username}" }
                                button {
                                    onclick: move |_| on_remove.call(member.user_id),
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
                    p { style: "color: #787774;", "Loading members..." }
                },
            }

            input {
                r#type: "text",
                placeholder: "Search users to add...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
            if !search().trim().is_empty() {
                if let Some(Ok(users)) = &*candidates.read_unchecked() {
                    ul {
                        style: "list-style: none; padding: 0;",
                        for user in users.clone() {
                            li {
                                key: "{user.id}",
                                style: "display: flex; justify-content: space-between; align-items: center;",
                                span { "{user.username}" }
                                button {
                                    onclick: move |_| on_add.call(user.id),
                                    "Add"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Leaderboard(circle_id: i64) -> Element {
    let app = use_app();
    let entries = use_resource(move || {
        let app = app.clone();
        async move { app.circle_leaderboard(circle_id).await }
    });

    rsx! {
        div {
            class: "circle-leaderboard",
            style: "margin-top: 1.5rem;",

            h3 { "Leaderboard" }
            match &*entries.read_unchecked() {
                Some(Ok(entries)) if entries.is_empty() => rsx! {
                    p { style: "color: #787774;", "No activity yet." }
                },
                Some(Ok(entries)) => rsx! {
                    table {
                        style: "width: 100%; border-collapse: collapse; font-size: 0.9375rem;",
                        thead {
                            tr {
                                th { style: "text-align: left;", "Member" }
                                th { style: "text-align: right;", "Check-ins" }
                                th { style: "text-align: right;", "Active goals" }
                            }
                        }
                        tbody {
                            for entry in entries.clone() {
                                tr {
                                    key: "{entry.user_id}",
                                    td { "{entry.username}" }
                                    td { style: "text-align: right;", "{entry.total_checkins}" }
                                    td { style: "text-align: right;", "{entry.active_goals}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading leaderboard..." }
                },
            }
        }
    }
}

#[component]
fn MessageBoard(circle_id: i64) -> Element {
    let app = use_app();
    let mut content = use_signal(String::new);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut sending = use_signal(|| false);

    let messages_app = app.clone();
    let mut messages = use_resource(move || {
        let app = messages_app.clone();
        async move { app.circle_messages(circle_id).await }
    });

    let on_send = move |_| {
        let form = CircleMessageForm { content: content() };
        if let Err(validation) = form.validate() {
            errors.set(Some(validation));
            return;
        }
        errors.set(None);

        let app = app.clone();
        spawn(async move {
            sending.set(true);
            if app.send_circle_message(circle_id, &form.content).await.is_ok() {
                content.set(String::new());
                messages.restart();
            }
            sending.set(false);
        });
    };

    rsx! {
        div {
            class: "circle-messages",
            style: "margin-top: 1.5rem;",

            h3 { "Messages" }
            match &*messages.read_unchecked() {
                Some(Ok(messages)) if messages.is_empty() => rsx! {
                    p { style: "color: #787774;", "No messages yet. Say hello!" }
                },
                Some(Ok(messages)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for message in messages.clone() {
                            li {
                                key: "{message.id}",
                                span { style: "font-weight: 600;", "{message.username}: " }
                                span { "{message.content}" }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading messages..." }
                },
            }

            div {
                style: "display: flex; gap: 0.5rem; margin-top: 0.5rem;",
                input {
                    r#type: "text",
                    style: "flex: 1;",
                    placeholder: "Write a message...",
                    value: content(),
                    oninput: move |evt| content.set(evt.value()),
                }
                button {
                    disabled: sending(),
                    onclick: on_send,
                    "Send"
                }
            }
            if let Some(message) = field_message(&errors(), "content") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }
        }
    }
}
