//! Circle list and creation form.

use api::forms::CircleForm;
use dioxus::prelude::*;
use ui::use_app;
use validator::ValidationErrors;

use crate::views::field_message;
use crate::Route;

#[component]
pub fn Circles() -> Element {
    let app = use_app();
    let mut show_form = use_signal(|| false);
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut submitting = use_signal(|| false);

    let list_app = app.clone();
    let mut circles = use_resource(move || {
        let app = list_app.clone();
        async move { app.circles().await }
    });

    let on_create = move |_| {
        let form = CircleForm {
            name: name(),
            description: description(),
        };
        let input = match form.parsed() {
            Ok(input) => input,
            Err(validation) => {
                errors.set(Some(validation));
                return;
            }
        };
        errors.set(None);

        let app = app.clone();
        spawn(async move {
            submitting.set(true);
            if app.create_circle(&input).await.is_ok() {
                name.set(String::new());
                description.set(String::new());
                show_form.set(false);
                circles.restart();
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "circles-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { "Circles" }
                button {
                    class: "primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New circle" }
                }
            }

            if show_form() {
                div {
                    class: "circle-form",
                    style: "display: flex; flex-direction: column; gap: 0.5rem; border: 1px solid #e0e0e0; border-radius: 6px; padding: 1rem; margin: 1rem 0;",

                    input {
                        r#type: "text",
                        placeholder: "Circle name",
                        value: name(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                    if let Some(message) = field_message(&errors(), "name") {
                        span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                    }

                    textarea {
                        placeholder: "What is this circle about? (optional)",
                        value: description(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                    if let Some(message) = field_message(&errors(), "description") {
                        span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                    }

                    button {
                        class: "primary",
                        disabled: submitting(),
                        onclick: on_create,
                        "Create circle"
                    }
                }
            }

            match &*circles.read_unchecked() {
                Some(Ok(circles)) if circles.is_empty() => rsx! {
                    p { style: "color: #787774;", "You are not in any circles yet." }
                },
                Some(Ok(circles)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for circle in circles.clone() {
                            li {
                                key: "{circle.id}",
                                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 0.75rem;",
                                Link {
                                    to: Route::CircleDetail { circle_id: circle.id },
                                    span { style: "font-weight: 600;", "{circle.name}" }
                                }
                                if let Some(description) = &circle.description {
                                    p { style: "margin: 0.25rem 0 0; color: #787774; font-size: 0.875rem;", "{description}" }
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading circles..." }
                },
            }
        }
    }
}
