use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use notes_core::model::Session;
use services::LoginState;

use crate::context::{AppContext, CurrentSession};
use crate::routes::Route;
use crate::views::StatusLine;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<CurrentSession>();
    let navigator = use_navigator();
    let notes = ctx.notes();
    let mut login = use_signal(LoginState::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = login.write().begin();
        let notes = notes.clone();
        let mut session = session;
        spawn(async move {
            let outcome = notes.login(&form).await;
            let user = outcome.as_ref().ok().cloned().flatten();
            if login.write().finish(outcome) {
                // The reply may omit the user; ask the server in that case.
                let current = match user {
                    Some(user) => Session { user: Some(user) },
                    None => notes.current_session().await,
                };
                session.set(current);
                let _ = navigator.push(Route::Dashboard {});
            }
        });
    };

    let state = login.read().clone();

    rsx! {
        div { class: "page auth-page",
            h2 { "Log in" }
            form { id: "loginForm", class: "auth-form", onsubmit: on_submit,
                label { r#for: "loginEmail", "Email" }
                input {
                    id: "loginEmail",
                    r#type: "email",
                    value: "{state.form.email}",
                    oninput: move |evt| login.write().form.email = evt.value(),
                }
                label { r#for: "loginPassword", "Password" }
                input {
                    id: "loginPassword",
                    r#type: "password",
                    value: "{state.form.password}",
                    oninput: move |evt| login.write().form.password = evt.value(),
                }
                button { class: "btn btn-primary", r#type: "submit", "Log in" }
            }
            StatusLine { id: "loginStatus", status: state.status().cloned() }
            p { class: "auth-switch",
                "New here? "
                Link { to: Route::Signup {}, "Create an account" }
            }
        }
    }
}
