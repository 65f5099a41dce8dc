use dioxus::prelude::*;
use services::Action;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizRecordCardVm, map_quiz_records};

#[derive(Clone, Debug, PartialEq)]
struct HistoryData {
    cards: Vec<QuizRecordCardVm>,
}

#[component]
pub fn HistoryView() -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();

    let resource = use_resource(move || {
        let notes = notes.clone();
        async move {
            let records = notes
                .quiz_history()
                .await
                .map_err(|err| ViewError::Failed(err.user_message(Action::LoadHistory)))?;
            Ok::<_, ViewError>(HistoryData {
                cards: map_quiz_records(&records),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "My quizzes" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { "No quizzes yet. Upload some notes to get started." }
                    } else {
                        ul { class: "history-list",
                            for card in data.cards {
                                RecordCard { card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn RecordCard(card: QuizRecordCardVm) -> Element {
    rsx! {
        li { class: "history-card",
            span { class: "history-date", "{card.date_str}" }
            span { class: "history-score", "{card.score_str}" }
            p { "{card.question_count} questions" }
            if let Some(preview) = card.summary_preview {
                p { class: "history-summary", "{preview}" }
            }
        }
    }
}
