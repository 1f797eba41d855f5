//! The aggregated check-in feed with its three scopes.

use api::{CreateCommentInput, CreateReactionInput, FeedItem, FeedScope};
use dioxus::prelude::*;
use ui::use_app;

#[component]
pub fn Feed() -> Element {
    let app = use_app();
    let mut scope = use_signal(|| FeedScope::All);

    let mut items = use_resource(move || {
        let app = app.clone();
        let scope = scope();
        async move { app.feed(scope).await }
    });

    let tab = |label: &'static str, value: FeedScope| {
        let active = scope() == value;
        rsx! {
            button {
                class: if active { "tab active" } else { "tab" },
                style: if active { "font-weight: 700;" } else { "" },
                onclick: move |_| scope.set(value),
                "{label}"
            }
        }
    };

    rsx! {
        div {
            class: "feed-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            div {
                class: "feed-tabs",
                style: "display: flex; gap: 0.5rem; margin-bottom: 1rem;",
                {tab("Everyone", FeedScope::All)}
                {tab("Following", FeedScope::Following)}
                {tab("Circles", FeedScope::Circles)}
            }

            match &*items.read_unchecked() {
                Some(Ok(feed)) if feed.is_empty() => rsx! {
                    p { style: "color: #787774;", "Nothing here yet. Check in on a goal to get things moving." }
                },
                Some(Ok(feed)) => rsx! {
                    div {
                        style: "display: flex; flex-direction: column; gap: 1rem;",
                        for item in feed.clone() {
                            CheckInCard {
                                key: "{item.check_in.id}",
                                item,
                                on_changed: move |_| items.restart(),
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading feed..." }
                },
            }
        }
    }
}

/// One check-in in the feed: goal context, content, a like button and an
/// inline comment box.
#[component]
fn CheckInCard(item: FeedItem, on_changed: EventHandler<()>) -> Element {
    let app = use_app();
    let mut show_comment = use_signal(|| false);
    let mut comment_text = use_signal(String::new);
    let mut pending = use_signal(|| false);

    let check_in_id = item.check_in.id;
    let username = item.check_in.username.clone().unwrap_or_default();

    let like_app = app.clone();
    let on_like = move |_| {
        let app = like_app.clone();
        spawn(async move {
            pending.set(true);
            let input = CreateReactionInput {
                kind: "like".to_string(),
            };
            if app.add_reaction(check_in_id, &input).await.is_ok() {
                on_changed.call(());
            }
            pending.set(false);
        });
    };

    let on_comment = move |_| {
        let content = comment_text().trim().to_string();
        if content.is_empty() {
            app.notifier.error("Comment cannot be empty");
            return;
        }
        let app = app.clone();
        spawn(async move {
            pending.set(true);
            let input = CreateCommentInput { content };
            if app.add_comment(check_in_id, &input).await.is_ok() {
                comment_text.set(String::new());
                show_comment.set(false);
                on_changed.call(());
            }
            pending.set(false);
        });
    };

    rsx! {
        div {
            class: "check-in-card",
            style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 1rem;",

            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                span { style: "font-weight: 600;", "{username}" }
                if let Some(goal) = &item.check_in.goal {
                    span {
                        class: "goal-type-badge",
                        style: "font-size: 0.8125rem; color: #787774;",
                        "{goal.goal_type.as_str()}"
                    }
                }
            }

            if let Some(goal) = &item.check_in.goal {
                h3 { style: "margin: 0.5rem 0 0;", "{goal.title}" }
            }

            if let Some(content) = &item.check_in.content {
                p { style: "margin: 0.5rem 0 0;", "{content}" }
            }

            div {
                style: "display: flex; gap: 1rem; margin-top: 0.75rem; border-top: 1px solid #f0f0f0; padding-top: 0.5rem;",

                button {
                    disabled: pending(),
                    onclick: on_like,
                    "♥ {item.reaction_count.unwrap_or(0)}"
                }
                button {
                    onclick: move |_| show_comment.set(!show_comment()),
                    "💬 {item.comment_count.unwrap_or(0)}"
                }
            }

            if show_comment() {
                div {
                    style: "display: flex; gap: 0.5rem; margin-top: 0.5rem;",
                    input {
                        r#type: "text",
                        style: "flex: 1;",
                        placeholder: "Write a comment...",
                        value: comment_text(),
                        oninput: move |evt| comment_text.set(evt.value()),
                    }
                    button {
                        disabled: pending(),
                        onclick: on_comment,
                        "Send"
                    }
                }
            }
        }
    }
}
