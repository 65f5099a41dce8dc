use async_trait::async_trait;
use notes_core::model::{
    Difficulty, LeaderboardEntry, LoginForm, NoteFile, Quiz, QuizRecord, QuizResult, Session,
    SignupForm, UserRef,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The remote notes server, one method per endpoint.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `GET /me`
    async fn me(&self) -> Result<Session, ApiError>;

    /// `POST /upload` (multipart, field `file`). Returns the raw summary.
    async fn upload(&self, file: NoteFile) -> Result<String, ApiError>;

    /// `POST /generate_quiz`
    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Quiz, ApiError>;

    /// `POST /save_quiz`. The reply body is only ever logged.
    async fn save_quiz(&self, result: &QuizResult) -> Result<serde_json::Value, ApiError>;

    /// `POST /signup`
    async fn signup(&self, form: &SignupForm) -> Result<AuthReply, ApiError>;

    /// `POST /login`
    async fn login(&self, form: &LoginForm) -> Result<AuthReply, ApiError>;

    /// `POST /logout`
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /dashboard?format=json`
    async fn quiz_history(&self) -> Result<Vec<QuizRecord>, ApiError>;

    /// `GET /leaderboard`
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError>;
}

/// Body of `/generate_quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub summary: String,
    pub difficulty: Difficulty,
}

/// Reply of `/signup` and `/login`. Every field is optional because signup
/// success may carry any body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadReply {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateQuizReply {
    pub quiz: Quiz,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryReply {
    #[serde(default)]
    pub quizzes: Vec<QuizRecord>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LeaderboardReply {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Failure body. The server uses `error` on most routes and `message` on
/// the auth routes.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error
            .filter(|text| !text.is_empty())
            .or(self.message.filter(|text| !text.is_empty()))
    }
}
