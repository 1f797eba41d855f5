//! Signed-in user overview: identity card plus activity counts.

use dioxus::prelude::*;
use ui::{use_app, use_session};

#[component]
pub fn Profile() -> Element {
    let app = use_app();
    let session = use_session();

    let goals_app = app.clone();
    let goals = use_resource(move || {
        let app = goals_app.clone();
        async move { app.goals().await }
    });

    let circles_app = app.clone();
    let circles = use_resource(move || {
        let app = circles_app.clone();
        async move { app.circles().await }
    });

    let buddies = use_resource(move || {
        let app = app.clone();
        async move { app.buddies().await }
    });

    let active_goals = match &*goals.read_unchecked() {
        Some(Ok(goals)) => goals.iter().filter(|goal| goal.is_active).count(),
        _ => 0,
    };
    let circle_count = match &*circles.read_unchecked() {
        Some(Ok(circles)) => circles.len(),
        _ => 0,
    };
    let buddy_count = match &*buddies.read_unchecked() {
        Some(Ok(buddies)) => buddies.len(),
        _ => 0,
    };

    let user = session().user;
    let initial = user
        .as_ref()
        .and_then(|user| user.username.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "profile-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            if let Some(user) = user {
                div {
                    style: "display: flex; align-items: center; gap: 1rem; border: 1px solid #e0e0e0; border-radius: 6px; padding: 1rem;",
                    div {
                        style: "width: 4rem; height: 4rem; border-radius: 50%; background: #e0e0e0; display: flex; align-items: center; justify-content: center; font-size: 1.5rem; font-weight: 600;",
                        "{initial}"
                    }
                    div {
                        h2 { style: "margin: 0;", "{user.username}" }
                        p { style: "margin: 0.25rem 0 0; color: #787774;", "{user.email}" }
                    }
                }
            }

            div {
                style: "display: flex; gap: 1rem; margin-top: 1rem;",
                StatCard { label: "Active goals", value: active_goals }
                StatCard { label: "Circles", value: circle_count }
                StatCard { label: "Buddies", value: buddy_count }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: usize) -> Element {
    rsx! {
        div {
            style: "flex: 1; border: 1px solid #e0e0e0; border-radius: 6px; padding: 0.75rem;",
            p { style: "margin: 0; color: #787774; font-size: 0.875rem;", "{label}" }
            p { style: "margin: 0.25rem 0 0; font-size: 1.5rem; font-weight: 700;", "{value}" }
        }
    }
}
