use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page",
            h2 { "{ctx.app_name()}" }
            p { "Upload your notes, get a summary, and test yourself with a generated quiz." }
            div { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::Dashboard {}, "Go to dashboard" }
                Link { class: "btn btn-secondary", to: Route::Signup {}, "Create an account" }
            }
        }
    }
}
