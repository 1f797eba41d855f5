//! Single goal: details, check-in entry, check-in history.

use api::forms::{CheckInForm, GoalForm};
use api::Goal;
use dioxus::prelude::*;
use ui::use_app;
use validator::ValidationErrors;

use crate::views::field_message;
use crate::views::goals::GoalEditor;
use crate::Route;

#[component]
pub fn GoalDetail(goal_id: i64) -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut editing = use_signal(|| false);

    let goal_app = app.clone();
    let mut goal = use_resource(move || {
        let app = goal_app.clone();
        async move { app.goal(goal_id).await }
    });

    let check_ins_app = app.clone();
    let mut check_ins = use_resource(move || {
        let app = check_ins_app.clone();
        async move { app.goal_check_ins(goal_id).await }
    });

    let on_delete = move |_| {
        let app = app.clone();
        spawn(async move {
            if app.delete_goal(goal_id).await.is_ok() {
                nav.replace(Route::Goals {});
            }
        });
    };

    rsx! {
        div {
            class: "goal-detail-page",
            style: "max-width: 640px; margin: 0 auto; padding: 1rem;",

            match &*goal.read_unchecked() {
                Some(Ok(current)) => {
                    let current = current.clone();
                    let form = form_from_goal(&current);
                    rsx! {
                        div {
                            style: "display: flex; justify-content: space-between; align-items: baseline;",
                            h2 { "{current.title}" }
                            div {
                                style: "display: flex; gap: 0.5rem;",
                                button {
                                    onclick: move |_| editing.set(!editing()),
                                    if editing() { "Cancel" } else { "Edit" }
                                }
                                button {
                                    class: "danger",
                                    onclick: on_delete,
                                    "Delete"
                                }
                            }
                        }

                        p {
                            style: "color: #787774; font-size: 0.875rem;",
                            "{current.goal_type.as_str()}"
                            if !current.is_active { " · inactive" }
                        }
                        if let Some(description) = &current.description {
                            p { "{description}" }
                        }

                        if editing() {
                            GoalEditor {
                                goal_id: Some(goal_id),
                                initial: Some(form),
                                on_saved: move |_| {
                                    editing.set(false);
                                    goal.restart();
                                },
                            }
                        }

                        CheckInEntry {
                            goal: current,
                            on_checked_in: move |_| check_ins.restart(),
                        }
                    }
                }
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading goal..." }
                },
            }

            h3 { style: "margin-top: 1.5rem;", "Check-ins" }
            match &*check_ins.read_unchecked() {
                Some(Ok(check_ins)) if check_ins.is_empty() => rsx! {
                    p { style: "color: #787774;", "No check-ins yet." }
                },
                Some(Ok(check_ins)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem;",
                        for check_in in check_ins.clone() {
                            li {
                                key: "{check_in.id}",
                                style: "border: 1px solid #e0e0e0; border-radius: 6px; padding: 0.75rem;",
                                if let Some(content) = &check_in.content {
                                    p { style: "margin: 0;", "{content}" }
                                } else {
                                    p { style: "margin: 0; color: #787774;", "Checked in." }
                                }
                                span {
                                    style: "color: #787774; font-size: 0.8125rem;",
                                    {check_in.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                }
                            }
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    p { class: "form-error", style: "color: #c4314b;", "{err}" }
                },
                None => rsx! {
                    p { style: "color: #787774;", "Loading check-ins..." }
                },
            }
        }
    }
}

fn form_from_goal(goal: &Goal) -> GoalForm {
    GoalForm {
        title: goal.title.clone(),
        description: goal.description.clone().unwrap_or_default(),
        goal_type: Some(goal.goal_type),
        start_date: goal
            .start_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        end_date: goal
            .end_date
            .map(|date| date.to_string())
            .unwrap_or_default(),
        is_active: goal.is_active,
        circle_id: goal.circle_id,
    }
}

#[component]
fn CheckInEntry(goal: Goal, on_checked_in: EventHandler<()>) -> Element {
    let app = use_app();
    let mut content = use_signal(String::new);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut submitting = use_signal(|| false);

    let goal_id = goal.id;
    let goal_type = goal.goal_type;

    let on_submit = move |_| {
        let form = CheckInForm {
            content: content(),
            goal_type: Some(goal_type),
        };
        let input = match form.parsed(goal_id) {
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
            if app.create_check_in(goal_id, &input).await.is_ok() {
                content.set(String::new());
                on_checked_in.call(());
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "check-in-entry",
            style: "display: flex; flex-direction: column; gap: 0.5rem; border: 1px solid #e0e0e0; border-radius: 6px; padding: 1rem; margin-top: 1rem;",

            textarea {
                placeholder: if goal_type.requires_check_in_content() {
                    "What did you get done?"
                } else {
                    "Add a note (optional)"
                },
                value: content(),
                oninput: move |evt| content.set(evt.value()),
            }
            if let Some(message) = field_message(&errors(), "content") {
                span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
            }

            button {
                class: "primary",
                disabled: submitting(),
                onclick: on_submit,
                "Check in"
            }
        }
    }
}
