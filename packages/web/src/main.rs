use dioxus::prelude::*;

use ui::{use_app, use_session, AppProvider, AuthProvider, Navbar, ToastProvider};
use views::{
    Buddies, CircleDetail, Circles, Feed, GoalDetail, Goals, Login, Profile, Register, Settings,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AppShell)]
        #[route("/")]
        Feed {},
        #[route("/goals")]
        Goals {},
        #[route("/goals/:goal_id")]
        GoalDetail { goal_id: i64 },
        #[route("/circles")]
        Circles {},
        #[route("/circles/:circle_id")]
        CircleDetail { circle_id: i64 },
        #[route("/buddies")]
        Buddies {},
        #[route("/profile")]
        Profile {},
        #[route("/settings")]
        Settings {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |errors: ErrorContext| {
                let messages: Vec<String> =
                    errors.errors().iter().map(|error| error.to_string()).collect();
                rsx! {
                    div {
                        style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; gap: 1rem;",
                        h2 { "Something went wrong" }
                        for message in messages {
                            p { style: "color: #c4314b;", "{message}" }
                        }
                        button {
                            onclick: move |_| errors.clear_errors(),
                            "Try again"
                        }
                        a { href: "/", "Back to the feed" }
                    }
                }
            },

            AppProvider {
                AuthProvider {
                    ToastProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}

/// Layout for the authenticated routes: navbar plus a guard that sends
/// logged-out visitors to the login page.
#[component]
fn AppShell() -> Element {
    let app = use_app();
    let mut session = use_session();
    let nav = use_navigator();

    if !session().is_authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let on_logout = move |_| {
        let app = app.clone();
        spawn(async move {
            app.auth.logout().await;
            session.set(app.auth.snapshot());
            nav.replace(Route::Login {});
        });
    };

    rsx! {
        Navbar {
            on_logout: on_logout,

            Link { to: Route::Feed {}, "Feed" }
            Link { to: Route::Goals {}, "Goals" }
            Link { to: Route::Circles {}, "Circles" }
            Link { to: Route::Buddies {}, "Buddies" }
            Link { to: Route::Profile {}, "Profile" }
            Link { to: Route::Settings {}, "Settings" }
        }
        Outlet::<Route> {}
    }
}
