use dioxus::prelude::*;
use services::Action;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LeaderboardRowVm, map_leaderboard};

#[component]
pub fn LeaderboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();

    let resource = use_resource(move || {
        let notes = notes.clone();
        async move {
            let entries = notes
                .leaderboard()
                .await
                .map_err(|err| ViewError::Failed(err.user_message(Action::LoadLeaderboard)))?;
            Ok::<_, ViewError>(map_leaderboard(&entries))
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Leaderboard" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { "Nobody has finished a quiz yet." }
                    } else {
                        table { class: "leaderboard",
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Name" }
                                    th { "Score" }
                                    th { "Date" }
                                }
                            }
                            tbody {
                                for row in rows {
                                    LeaderboardRow { row }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn LeaderboardRow(row: LeaderboardRowVm) -> Element {
    rsx! {
        tr {
            td { "{row.rank}" }
            td { "{row.name}" }
            td { "{row.score_str}" }
            td { "{row.date_str}" }
        }
    }
}
