//! Goal list and creation form.

use api::forms::GoalForm;
use api::GoalType;
use dioxus::prelude::*;
use ui::use_app;
use validator::ValidationErrors;

use crate::views::field_message;
use crate::Route;

#[component]
pub fn Goals() -> Element {
    let app = use_app();
    let mut show_form = use_signal(|| false);

    let mut goals = use_resource(move || {
        let app = app.clone();
        async move { app.goals().await }
    });

    rsx! {
        div {
            class: "goals-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h2 { "Goals" }
                button {
                    class: "primary",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New goal" }
                }
            }

            if show_form() {
                GoalEditor {
                    on_saved: move |_| {
                        show_form.set(false);
                        goals.restart();
                    },
                }
            }

            match &*goals.read_unchecked() {
                Some(Ok(goals)) if goals.is_empty() => rsx! {
                    p { style: "color: #787774;", "No goals yet. Create one to get started." }
                },
                Some(Ok(goals)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for goal in goals.clone() {
                            li {
                                key: "{goal.id}",
                                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 0.75rem;",
                                Link {
                                    to: Route::GoalDetail { goal_id: goal.id },
                                    span { style: "font-weight: 600;", "{goal.title}" }
                                }
                                span {
                                    style: "margin-left: 0.5rem; color: #787774; font-size: 0.8125rem;",
                                    "{goal.goal_type.as_str()}"
                                }
                                if !goal.is_active {
                                    span {
                                        style: "margin-left: 0.5rem; color: #787774; font-size: 0.8125rem;",
                                        "(inactive)"
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
                    p { style: "color: #787774;", "Loading goals..." }
                },
            }
        }
    }
}

/// Form for creating or editing a goal. When `goal_id` is set, saving
/// updates that goal instead of creating a new one.
#[component]
pub fn GoalEditor(
    #[props(default)] goal_id: Option<i64>,
    #[props(default)] initial: Option<GoalForm>,
    on_saved: EventHandler<()>,
) -> Element {
    let app = use_app();
    let seed = initial.unwrap_or_default();

    let mut title = use_signal(|| seed.title.clone());
    let mut description = use_signal(|| seed.description.clone());
    let mut goal_type = use_signal(|| seed.goal_type);
    let mut start_date = use_signal(|| seed.start_date.clone());
    let mut end_date = use_signal(|| seed.end_date.clone());
    let mut is_active = use_signal(|| seed.is_active);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let form = GoalForm {
            title: title(),
            description: description(),
            goal_type: goal_type(),
            start_date: start_date(),
            end_date: end_date(),
            is_active: is_active(),
            circle_id: None,
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
            let result = match goal_id {
                Some(goal_id) => app.update_goal(goal_id, &input).await,
                None => app.create_goal(&input).await,
            };
            if result.is_ok() {
                on_saved.call(());
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "goal-editor",
            style: "display: flex; flex-direction: column; gap: 0.5rem; border: 1px solid #e0e0e0; border-radius: 6px; padding: 1rem; margin: 1rem 0;",

            input {
                r#type: "text",
                placeholder: "Title",
                value: title(),
                oninput: move |evt| title.set(evt.value()),
            }
            if let Some(message) = field_message(&errors(), "title") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }

            textarea {
                placeholder: "Description (optional)",
                value: description(),
                oninput: move |evt| description.set(evt.value()),
            }
            if let Some(message) = field_message(&errors(), "description") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }

            select {
                value: goal_type().map(|t| t.as_str()).unwrap_or(""),
                onchange: move |evt| goal_type.set(GoalType::from_str(&evt.value())),
                option { value: "", disabled: true, selected: goal_type().is_none(), "Goal type..." }
                for choice in GoalType::ALL {
                    option {
                        value: choice.as_str(),
                        selected: goal_type() == Some(choice),
                        "{choice.as_str()}"
                    }
                }
            }
            if let Some(message) = field_message(&errors(), "goal_type") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }

            div {
                style: "display: flex; gap: 0.5rem;",
                input {
                    r#type: "date",
                    value: start_date(),
                    oninput: move |evt| start_date.set(evt.value()),
                }
                input {
                    r#type: "date",
                    value: end_date(),
                    oninput: move |evt| end_date.set(evt.value()),
                }
            }
            if let Some(message) = field_message(&errors(), "end_date") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }

            label {
                style: "display: flex; gap: 0.5rem; align-items: center; font-size: 0.875rem;",
                input {
                    r#type: "checkbox",
                    checked: is_active(),
                    onchange: move |evt| is_active.set(evt.checked()),
                }
                "Active"
            }

            button {
                class: "primary",
                disabled: submitting(),
                onclick: on_submit,
                if goal_id.is_some() { "Save changes" } else { "Create goal" }
            }
        }
    }
}
