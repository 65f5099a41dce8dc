//! Dashboard page state.
//!
//! Every handler goes through one `PageState` value owned by the view.
//! Slow requests are split into `begin_*` (validate input, hand out a
//! `RequestToken`) and `finish_*` (apply the reply). A reply is only applied
//! while its token is still the newest one of its kind, so a late answer to
//! an older request cannot overwrite newer state.

use notes_core::model::{Difficulty, NoteFile, Quiz, QuizResult, Selections, Summary};
use tracing::warn;

use crate::api::QuizRequest;
use crate::error::{Action, ActionError, InputError};
use crate::status::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    GenerateQuiz,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    kind: RequestKind,
    generation: u64,
}

impl RequestToken {
    #[must_use]
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// Whether a finished request changed the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delivery {
    Applied,
    Stale,
}

/// Section the view should scroll into view next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Summary,
    Quiz,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuizPanel {
    #[default]
    Empty,
    Loading,
    Ready(Quiz),
}

#[derive(Debug)]
pub struct UploadTicket {
    pub token: RequestToken,
    pub file: NoteFile,
}

#[derive(Debug)]
pub struct QuizTicket {
    pub token: RequestToken,
    pub request: QuizRequest,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    status: Option<Status>,
    summary: Option<Summary>,
    sections_revealed: bool,
    quiz: QuizPanel,
    selections: Selections,
    result: Option<QuizResult>,
    pending_scroll: Option<Section>,
    upload_generation: u64,
    quiz_generation: u64,
}

impl PageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn sections_revealed(&self) -> bool {
        self.sections_revealed
    }

    #[must_use]
    pub fn quiz_panel(&self) -> &QuizPanel {
        &self.quiz
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        match &self.quiz {
            QuizPanel::Ready(quiz) => Some(quiz),
            QuizPanel::Empty | QuizPanel::Loading => None,
        }
    }

    #[must_use]
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn take_scroll(&mut self) -> Option<Section> {
        self.pending_scroll.take()
    }

    /// Record the outcome of reading a picked file. The returned file is
    /// the one the next upload sends; `None` when the read failed.
    pub fn file_read(&mut self, file_name: &str, bytes: Option<Vec<u8>>) -> Option<NoteFile> {
        let Some(bytes) = bytes else {
            self.fail(Action::Upload, InputError::UnreadableFile.into());
            return None;
        };
        self.status = Some(Status::success(format!("Selected: {file_name}")));
        Some(NoteFile::new(file_name, bytes))
    }

    /// The picker was emptied.
    pub fn file_cleared(&mut self) {
        self.status = None;
    }

    /// # Errors
    ///
    /// Returns `InputError::NoFile` when nothing is selected. No request
    /// should be made in that case.
    pub fn begin_upload(&mut self, file: Option<NoteFile>) -> Result<UploadTicket, ActionError> {
        let Some(file) = file else {
            return Err(self.fail(Action::Upload, InputError::NoFile.into()));
        };
        self.upload_generation += 1;
        self.status = Some(Status::neutral("Uploading and summarizing..."));
        Ok(UploadTicket {
            token: RequestToken {
                kind: RequestKind::Upload,
                generation: self.upload_generation,
            },
            file,
        })
    }

    /// Apply the reply to an upload. On failure nothing but the status changes.
    pub fn finish_upload(
        &mut self,
        token: RequestToken,
        outcome: Result<String, ActionError>,
    ) -> Delivery {
        if !self.is_current(token) {
            return Delivery::Stale;
        }
        match outcome {
            Ok(raw) => {
                // An empty summary is shown but cannot seed a quiz.
                self.summary = Summary::parse(raw).ok();
                self.sections_revealed = true;
                // Quizzes still in flight were built from the previous summary.
                self.quiz_generation += 1;
                if self.quiz == QuizPanel::Loading {
                    self.quiz = QuizPanel::Empty;
                }
                self.status = Some(Status::success(
                    "Summary ready. Generate a quiz when ready.",
                ));
                self.pending_scroll = Some(Section::Summary);
            }
            Err(err) => {
                self.fail(Action::Upload, err);
            }
        }
        Delivery::Applied
    }

    /// # Errors
    ///
    /// Returns `InputError::NoSummary` when no summary is stored. No request
    /// should be made in that case.
    pub fn begin_quiz(&mut self, difficulty: Difficulty) -> Result<QuizTicket, ActionError> {
        let Some(summary) = self.summary.as_ref() else {
            return Err(self.fail(Action::GenerateQuiz, InputError::NoSummary.into()));
        };
        let request = QuizRequest {
            summary: summary.raw().to_string(),
            difficulty,
        };
        self.quiz_generation += 1;
        self.quiz = QuizPanel::Loading;
        self.status = Some(Status::neutral("Generating quiz..."));
        Ok(QuizTicket {
            token: RequestToken {
                kind: RequestKind::GenerateQuiz,
                generation: self.quiz_generation,
            },
            request,
        })
    }

    pub fn finish_quiz(&mut self, token: RequestToken, outcome: Result<Quiz, ActionError>) -> Delivery {
        if !self.is_current(token) {
            return Delivery::Stale;
        }
        match outcome {
            Ok(quiz) => {
                self.quiz = QuizPanel::Ready(quiz);
                self.selections.clear();
                self.status = Some(Status::success("Quiz ready!"));
                self.pending_scroll = Some(Section::Quiz);
            }
            Err(err) => {
                self.quiz = QuizPanel::Empty;
                self.fail(Action::GenerateQuiz, err);
            }
        }
        Delivery::Applied
    }

    pub fn select_option(&mut self, index: usize, letter: &str) {
        self.selections.select(index, letter);
    }

    /// Score the rendered quiz. Returns `None` when no quiz is shown.
    pub fn submit_quiz(&mut self) -> Option<QuizResult> {
        let quiz = self.quiz()?;
        let result = QuizResult::grade(quiz, &self.selections);
        self.result = Some(result.clone());
        Some(result)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        let latest = match token.kind {
            RequestKind::Upload => self.upload_generation,
            RequestKind::GenerateQuiz => self.quiz_generation,
        };
        if token.generation != latest {
            warn!(kind = ?token.kind, generation = token.generation, latest, "dropping stale reply");
            return false;
        }
        true
    }

    fn fail(&mut self, action: Action, err: ActionError) -> ActionError {
        self.status = Some(Status::error(err.user_message(action)));
        err
    }
}
