use std::sync::Arc;

use notes_core::model::{
    LeaderboardEntry, LoginForm, NoteFile, Quiz, QuizRecord, QuizResult, Session, SignupForm,
    UserRef,
};
use tracing::{debug, error, info};

use crate::api::{AuthReply, NotesApi, QuizRequest};
use crate::config::ApiConfig;
use crate::error::{Action, ActionError, ApiError};
use crate::http_api::HttpNotesApi;

/// App-facing operations over a `NotesApi`, with errors already sorted into
/// the user-facing taxonomy.
#[derive(Clone)]
pub struct NotesService {
    api: Arc<dyn NotesApi>,
}

impl NotesService {
    #[must_use]
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        Self { api }
    }

    /// Build a service talking HTTP to the configured server.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the HTTP client cannot be built.
    pub fn http(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(HttpNotesApi::new(config)?)))
    }

    /// Current session. Any failure reads as signed out.
    pub async fn current_session(&self) -> Session {
        match self.api.me().await {
            Ok(session) => session,
            Err(err) => {
                debug!(error = %err, "session check failed, treating as signed out");
                Session::signed_out()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn upload(&self, file: NoteFile) -> Result<String, ActionError> {
        self.api
            .upload(file)
            .await
            .map_err(|err| ActionError::from_api(Action::Upload, err))
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn generate_quiz(&self, request: &QuizRequest) -> Result<Quiz, ActionError> {
        self.api
            .generate_quiz(request)
            .await
            .map_err(|err| ActionError::from_api(Action::GenerateQuiz, err))
    }

    /// Persist a scored quiz. Called exactly once per submission; failures
    /// are logged and otherwise ignored by callers.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn save_result(&self, result: &QuizResult) -> Result<(), ActionError> {
        match self.api.save_quiz(result).await {
            Ok(reply) => {
                info!(score = result.score, total = result.total, %reply, "quiz saved");
                Ok(())
            }
            Err(err) => {
                let err = ActionError::from_api(Action::SaveQuiz, err);
                error!(message = %err.user_message(Action::SaveQuiz), "error saving quiz");
                Err(err)
            }
        }
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn signup(&self, form: &SignupForm) -> Result<(), ActionError> {
        self.api
            .signup(form)
            .await
            .map_err(|err| ActionError::from_api(Action::Signup, err))
            .and_then(accepted)
            .map(|reply| debug!(message = ?reply.message, "account created"))
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn login(&self, form: &LoginForm) -> Result<Option<UserRef>, ActionError> {
        self.api
            .login(form)
            .await
            .map_err(|err| ActionError::from_api(Action::Login, err))
            .and_then(accepted)
            .map(|reply| reply.user)
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn logout(&self) -> Result<(), ActionError> {
        self.api
            .logout()
            .await
            .map_err(|err| ActionError::from_api(Action::Logout, err))
    }

    /// Saved quizzes of the signed-in user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn quiz_history(&self) -> Result<Vec<QuizRecord>, ActionError> {
        let mut records = self
            .api
            .quiz_history()
            .await
            .map_err(|err| ActionError::from_api(Action::LoadHistory, err))?;
        // The server appends, so the newest record is last.
        records.reverse();
        Ok(records)
    }

    /// # Errors
    ///
    /// Returns `ActionError` on server or network failure.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ActionError> {
        self.api
            .leaderboard()
            .await
            .map_err(|err| ActionError::from_api(Action::LoadLeaderboard, err))
    }
}

// A 2xx reply can still say `"success": false`.
fn accepted(reply: AuthReply) -> Result<AuthReply, ActionError> {
    if reply.success == Some(false) {
        return Err(ActionError::Server {
            message: reply.message,
        });
    }
    Ok(reply)
}
