use dioxus::prelude::*;
use dioxus_router::Router;
use notes_core::model::Session;

use crate::context::CurrentSession;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(|| CurrentSession::new(Signal::new(None::<Session>)));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Notes2Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
