use dioxus::document::eval;
use dioxus::prelude::*;
use notes_core::model::{Difficulty, NoteFile};
use services::{Delivery, PageState, QuizPanel, Section, Status};
use tracing::warn;

use crate::context::AppContext;
use crate::views::StatusLine;
use crate::vm::{QuestionVm, SCORE_STEP, ScoreCounter, map_quiz};

const SUMMARY_SECTION_ID: &str = "summarySection";
const QUIZ_SECTION_ID: &str = "quizSection";

fn scroll_into_view(section: Section) {
    let id = match section {
        Section::Summary => SUMMARY_SECTION_ID,
        Section::Quiz => QUIZ_SECTION_ID,
    };
    let _ = eval(&format!(
        "document.getElementById('{id}')?.scrollIntoView({{behavior: 'smooth'}});"
    ));
}

#[derive(Clone, Debug, PartialEq)]
enum QuizBody {
    Empty,
    Loading,
    Questions(Vec<QuestionVm>),
}

#[derive(Clone, Debug, PartialEq)]
struct DashboardSnapshot {
    status: Option<Status>,
    revealed: bool,
    summary_text: String,
    quiz: QuizBody,
    result: Option<(u32, u32)>,
}

impl DashboardSnapshot {
    fn of(state: &PageState) -> Self {
        let quiz = match state.quiz_panel() {
            QuizPanel::Empty => QuizBody::Empty,
            QuizPanel::Loading => QuizBody::Loading,
            QuizPanel::Ready(quiz) => QuizBody::Questions(map_quiz(quiz, state.selections())),
        };
        Self {
            status: state.status().cloned(),
            revealed: state.sections_revealed(),
            summary_text: state
                .summary()
                .map(|summary| summary.display_text())
                .unwrap_or_default(),
            quiz,
            result: state.result().map(|result| (result.score, result.total)),
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let notes = ctx.notes();
    let mut page = use_signal(PageState::new);
    let mut picked_file = use_signal(|| None::<NoteFile>);
    let mut difficulty = use_signal(Difficulty::default);
    let mut submissions = use_signal(|| 0_u64);

    // The previously read file stays picked until the new one is in memory.
    let on_file_change = move |evt: FormEvent| {
        let Some(file) = evt.files().into_iter().next() else {
            picked_file.set(None);
            page.write().file_cleared();
            return;
        };
        spawn(async move {
            let name = file.name();
            let bytes = match file.read_bytes().await {
                Ok(bytes) => Some(bytes.to_vec()),
                Err(err) => {
                    warn!(file = %name, error = ?err, "could not read selected file");
                    None
                }
            };
            let read = page.write().file_read(&name, bytes);
            picked_file.set(read);
        });
    };

    let notes_for_upload = notes.clone();
    let start_upload = use_callback(move |()| {
        let begun = page.write().begin_upload(picked_file());
        let Ok(ticket) = begun else {
            return;
        };
        let notes = notes_for_upload.clone();
        spawn(async move {
            let outcome = notes.upload(ticket.file).await;
            let scroll = {
                let mut state = page.write();
                match state.finish_upload(ticket.token, outcome) {
                    Delivery::Applied => state.take_scroll(),
                    Delivery::Stale => None,
                }
            };
            if let Some(section) = scroll {
                scroll_into_view(section);
            }
        });
    });

    let notes_for_quiz = notes.clone();
    let generate = use_callback(move |()| {
        let begun = page.write().begin_quiz(difficulty());
        let Ok(ticket) = begun else {
            return;
        };
        let notes = notes_for_quiz.clone();
        spawn(async move {
            let outcome = notes.generate_quiz(&ticket.request).await;
            let scroll = {
                let mut state = page.write();
                match state.finish_quiz(ticket.token, outcome) {
                    Delivery::Applied => state.take_scroll(),
                    Delivery::Stale => None,
                }
            };
            if let Some(section) = scroll {
                scroll_into_view(section);
            }
        });
    });

    let notes_for_save = notes.clone();
    let submit = use_callback(move |()| {
        let scored = page.write().submit_quiz();
        let Some(result) = scored else {
            return;
        };
        *submissions.write() += 1;
        // Saved right away; the counter animation does not wait for it.
        let notes = notes_for_save.clone();
        spawn(async move {
            let _ = notes.save_result(&result).await;
        });
    });

    let on_select = use_callback(move |(index, letter): (usize, String)| {
        page.write().select_option(index, &letter);
    });

    let on_upload = move |evt: FormEvent| {
        evt.prevent_default();
        start_upload.call(());
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DashboardTestHandles>() {
                handles.register(DashboardHandles {
                    picked_file,
                    upload: start_upload,
                    generate,
                    select: on_select,
                    submit,
                });
            }
        }
    }

    let snapshot = DashboardSnapshot::of(&page.read());
    let section_class = if snapshot.revealed {
        "section"
    } else {
        "section hidden"
    };
    let submission = submissions();

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Dashboard" }
                p { class: "view-subtitle", "Upload a PDF, DOCX or TXT file to get a summary and a quiz." }
            }

            form { id: "uploadForm", class: "upload-form", onsubmit: on_upload,
                input {
                    id: "fileInput",
                    r#type: "file",
                    accept: ".pdf,.docx,.txt",
                    onchange: on_file_change,
                }
                button { class: "btn btn-primary", r#type: "submit", "Upload & summarize" }
            }
            StatusLine { id: "status", status: snapshot.status.clone() }

            section { id: SUMMARY_SECTION_ID, class: section_class,
                h3 { "Summary" }
                pre { id: "summaryText", class: "summary-text", "{snapshot.summary_text}" }
            }

            section { id: QUIZ_SECTION_ID, class: section_class,
                h3 { "Quiz" }
                div { class: "quiz-controls",
                    label { r#for: "difficulty", "Difficulty" }
                    select {
                        id: "difficulty",
                        onchange: move |evt| {
                            if let Ok(level) = evt.value().parse::<Difficulty>() {
                                difficulty.set(level);
                            }
                        },
                        for level in Difficulty::ALL {
                            option { value: "{level}", selected: level == difficulty(), "{level}" }
                        }
                    }
                    button {
                        id: "genQuizBtn",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| generate.call(()),
                        "Generate quiz"
                    }
                }
                div { id: "quizForm", class: "quiz-form",
                    match snapshot.quiz {
                        QuizBody::Empty => rsx! {},
                        QuizBody::Loading => rsx! {
                            div { class: "spinner" }
                        },
                        QuizBody::Questions(questions) => rsx! {
                            {questions.into_iter().map(|question| {
                                let key = question.index;
                                rsx! {
                                    QuestionBlock { key: "{key}", question, on_select }
                                }
                            })}
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| submit.call(()),
                                "Submit Quiz"
                            }
                        },
                    }
                }
            }

            if let Some((score, total)) = snapshot.result {
                div { id: "resultArea", class: "result-area",
                    ScoreDisplay { key: "{submission}", score, total }
                }
            }
        }
    }
}

#[component]
fn QuestionBlock(question: QuestionVm, on_select: EventHandler<(usize, String)>) -> Element {
    let index = question.index;
    rsx! {
        div { class: "question",
            p {
                strong { "{question.number_label}" }
                " {question.text}"
            }
            for option in question.options {
                label { class: "quiz-option",
                    input {
                        r#type: "radio",
                        name: "{question.input_name}",
                        value: "{option.letter}",
                        checked: option.checked,
                        onchange: {
                            let letter = option.letter.clone();
                            move |_| on_select.call((index, letter.clone()))
                        },
                    }
                    " {option.label}"
                }
            }
        }
    }
}

#[component]
fn ScoreDisplay(score: u32, total: u32) -> Element {
    let frames = use_hook(|| ScoreCounter::new(score, total).frames());
    let mut frame = use_signal(|| 0_usize);
    let last = frames.len().saturating_sub(1);

    use_future(move || async move {
        for idx in 1..=last {
            tokio::time::sleep(SCORE_STEP).await;
            frame.set(idx);
        }
    });

    let text = frames.get(frame()).cloned().unwrap_or_default();
    rsx! {
        h3 { class: "score", "{text}" }
    }
}

#[cfg(test)]
#[derive(Clone, Copy)]
pub(crate) struct DashboardHandles {
    pub(crate) picked_file: Signal<Option<NoteFile>>,
    pub(crate) upload: Callback<()>,
    pub(crate) generate: Callback<()>,
    pub(crate) select: Callback<(usize, String)>,
    pub(crate) submit: Callback<()>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DashboardTestHandles {
    inner: std::rc::Rc<std::cell::RefCell<Option<DashboardHandles>>>,
}

#[cfg(test)]
impl DashboardTestHandles {
    pub(crate) fn register(&self, handles: DashboardHandles) {
        *self.inner.borrow_mut() = Some(handles);
    }

    pub(crate) fn get(&self) -> DashboardHandles {
        (*self.inner.borrow()).expect("dashboard handles registered")
    }
}
