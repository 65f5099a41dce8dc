//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `NotesApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Server {
        status: reqwest::StatusCode,
        /// The `error` (or `message`) field of the response body, if any.
        message: Option<String>,
    },
    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    #[must_use]
    pub fn server(status: reqwest::StatusCode, message: Option<String>) -> Self {
        Self::Server { status, message }
    }
}

/// Errors raised while building an `ApiConfig`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid api url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api url must use http or https, got {0:?}")]
    UnsupportedScheme(String),
    #[error("invalid timeout seconds: {0:?}")]
    InvalidTimeout(String),
}

/// Problems with user input caught before any request is made.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Select a file first")]
    NoFile,
    #[error("No summary available")]
    NoSummary,
    #[error("Could not read the selected file")]
    UnreadableFile,
}

/// Which user action failed; picks the fallback wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    GenerateQuiz,
    SaveQuiz,
    Signup,
    Login,
    Logout,
    LoadHistory,
    LoadLeaderboard,
}

impl Action {
    fn server_fallback(self) -> &'static str {
        match self {
            Action::Upload => "Upload failed",
            Action::GenerateQuiz => "Quiz generation failed",
            Action::SaveQuiz => "Unknown error",
            Action::Signup => "Signup failed",
            Action::Login => "Login failed",
            Action::Logout => "Logout failed",
            Action::LoadHistory => "Could not load your quizzes",
            Action::LoadLeaderboard => "Could not load the leaderboard",
        }
    }

    fn network_message(self) -> &'static str {
        match self {
            Action::Upload => "An error occurred while uploading.",
            Action::GenerateQuiz => "An error occurred while generating quiz.",
            Action::SaveQuiz => "An error occurred while saving quiz.",
            Action::Signup => "An error occurred during signup.",
            Action::Login => "An error occurred during login.",
            Action::Logout => "An error occurred during logout.",
            Action::LoadHistory | Action::LoadLeaderboard => {
                "Something went wrong. Please try again."
            }
        }
    }
}

/// User-facing failure of one action. Every variant is terminal for that
/// action; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{}", .message.as_deref().unwrap_or("server rejected the request"))]
    Server { message: Option<String> },
    #[error("network error")]
    Network,
}

impl ActionError {
    /// Map a transport error. Network details are logged here and dropped.
    #[must_use]
    pub fn from_api(action: Action, err: ApiError) -> Self {
        match err {
            ApiError::Server { status, message } => {
                tracing::debug!(?action, %status, ?message, "server rejected request");
                Self::Server { message }
            }
            other => {
                tracing::error!(?action, error = %other, "request did not complete");
                Self::Network
            }
        }
    }

    /// Text shown to the user for this failure.
    #[must_use]
    pub fn user_message(&self, action: Action) -> String {
        match self {
            ActionError::Input(input) => input.to_string(),
            ActionError::Server { message } => message
                .clone()
                .unwrap_or_else(|| action.server_fallback().to_string()),
            ActionError::Network => action.network_message().to_string(),
        }
    }
}
