use dioxus::prelude::*;
use dioxus_router::Link;
use services::SignupState;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::StatusLine;

#[component]
pub fn SignupView() -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();
    let mut signup = use_signal(SignupState::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = signup.write().begin();
        let notes = notes.clone();
        spawn(async move {
            let outcome = notes.signup(&form).await;
            signup.write().finish(outcome);
        });
    };

    let state = signup.read().clone();

    rsx! {
        div { class: "page auth-page",
            h2 { "Create an account" }
            form { id: "signupForm", class: "auth-form", onsubmit: on_submit,
                label { r#for: "signupName", "Name" }
                input {
                    id: "signupName",
                    r#type: "text",
                    value: "{state.form.name}",
                    oninput: move |evt| signup.write().form.name = evt.value(),
                }
                label { r#for: "signupEmail", "Email" }
                input {
                    id: "signupEmail",
                    r#type: "email",
                    value: "{state.form.email}",
                    oninput: move |evt| signup.write().form.email = evt.value(),
                }
                label { r#for: "signupPassword", "Password" }
                input {
                    id: "signupPassword",
                    r#type: "password",
                    value: "{state.form.password}",
                    oninput: move |evt| signup.write().form.password = evt.value(),
                }
                button { class: "btn btn-primary", r#type: "submit", "Sign up" }
            }
            StatusLine { id: "signupStatus", status: state.status().cloned() }
            p { class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}
