use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};
use services::{GateDecision, gate};
use tracing::info;

use crate::context::{AppContext, CurrentSession};
use crate::views::{
    DashboardView, HistoryView, HomeView, LeaderboardView, LoginView, SignupView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
        #[route("/history", HistoryView)] History {},
        #[route("/leaderboard", LeaderboardView)] Leaderboard {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<CurrentSession>();
    let navigator = use_navigator();
    let route = use_route::<Route>();

    // Fetched once when the shell mounts.
    let notes = ctx.notes();
    let _session_check = use_resource(move || {
        let notes = notes.clone();
        let mut session = session;
        async move {
            let current = notes.current_session().await;
            session.set(current);
        }
    });

    // Re-applied on every page change against the cached session.
    use_effect(use_reactive!(|route| {
        let Some(current) = session.get() else {
            return;
        };
        let path = route.to_string();
        if gate(&current, &path) == GateDecision::RedirectToLogin {
            info!(%path, "no session, redirecting to login");
            let _ = navigator.replace(Route::Login {});
        }
    }));

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<CurrentSession>();
    let navigator = use_navigator();
    let signed_in_as = session
        .get()
        .and_then(|current| current.user().map(|user| user.name.clone()));

    let on_logout = move |_| {
        let notes = ctx.notes();
        let mut session = session;
        spawn(async move {
            // The local session is dropped even if the server call fails.
            let _ = notes.logout().await;
            session.set(notes_core::model::Session::signed_out());
            let _ = navigator.replace(Route::Login {});
        });
    };

    rsx! {
        nav { class: "sidebar",
            h1 { "Notes2Quiz" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::History {}, "My quizzes" } }
                li { Link { to: Route::Leaderboard {}, "Leaderboard" } }
            }
            div { class: "sidebar-account",
                if let Some(name) = signed_in_as {
                    p { class: "sidebar-user", "Signed in as {name}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: on_logout,
                        "Log out"
                    }
                } else {
                    Link { to: Route::Login {}, "Log in" }
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
    }
}
