//! Registration page.

use api::forms::RegisterForm;
use dioxus::prelude::*;
use ui::{use_app, use_session};
use validator::{Validate, ValidationErrors};

use crate::views::field_message;
use crate::Route;

#[component]
pub fn Register() -> Element {
    let app = use_app();
    let mut session = use_session();
    let nav = use_navigator();

    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(|| None::<ValidationErrors>);
    let mut server_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    if session().is_authenticated {
        nav.replace(Route::Feed {});
        return rsx! {};
    }

    let on_submit = move |_| {
        let form = RegisterForm {
            username: username(),
            email: email(),
            password: password(),
            confirm_password: confirm_password(),
        };
        if let Err(validation) = form.validate() {
            errors.set(Some(validation));
            return;
        }
        errors.set(None);
        server_error.set(None);

        let app = app.clone();
        spawn(async move {
            submitting.set(true);
            match app
                .auth
                .register(&form.username, &form.email, &form.password)
                .await
            {
                Ok(_) => {
                    session.set(app.auth.snapshot());
                    nav.replace(Route::Feed {});
                }
                Err(err) => server_error.set(Some(err.message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 { "Create your account" }

            div {
                class: "auth-form",
                style: "display: flex; flex-direction: column; gap: 0.75rem; width: 100%; max-width: 320px;",

                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "username") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "email") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "password") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt| confirm_password.set(evt.value()),
                }
                if let Some(message) = field_message(&errors(), "confirm_password") {
                    span { class: "field-error", style: "color: #c4314b; font-size: 0.8125rem;", "{message}" }
                }

                if let Some(message) = server_error() {
                    span { class: "form-error", style: "color: #c4314b;", "{message}" }
                }

                button {
                    class: "primary",
                    disabled: submitting(),
                    onclick: on_submit,
                    if submitting() { "Creating account..." } else { "Register" }
                }

                span {
                    style: "font-size: 0.875rem;",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Log in" }
                }
            }
        }
    }
}
