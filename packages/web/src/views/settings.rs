//! Account settings: change password.

use api::forms::ChangePasswordForm;
use dioxus::prelude::*;
use ui::{use_app, use_session};
use validator::{Validate, ValidationErrors};

use crate::views::field_message;
use crate::Route;

#[component]
pub fn Settings() -> Element {
    let app = use_app();
    let mut session = use_session();
    let nav = use_navigator();

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let form = ChangePasswordForm {
            current_password: current_password(),
            new_password: new_password(),
            confirm_password: confirm_password(),
        };
        if let Err(validation) = form.validate() {
            errors.set(Some(validation));
            return;
        }
        errors.set(None);

        let Some(user) = session().user else {
            return;
        };
        let app = app.clone();
        spawn(async move {
            submitting.set(true);
            // A password change revokes the current token server-side, so
            // finish by logging out and returning to the login page.
            if app.change_password(&user, &form.new_password).await.is_ok() {
                app.auth.logout().await;
                session.set(app.auth.snapshot());
                nav.replace(Route::Login {});
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "settings-page",
            style: "max-width: 480px; margin: 0 auto; padding: 1rem;",

            h2 { "Settings" }
            h3 { "Change password" }

            div {
                style: "display: flex; flex-direction: column; gap: 0.5rem;",

                input {
                    r#type: "password",
                    placeholder: "Current password",
                    value: current_password(),
                    oninput: move |evt| current_password.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "current_password") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                input {
                    r#type: "password",
                    placeholder: "New password",
                    value: new_password(),
                    oninput: move |evt| new_password.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "new_password") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm new password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "confirm_password") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: on_submit,
                    "Change password"
                }
            }
        }
    }
}
