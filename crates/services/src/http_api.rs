use async_trait::async_trait;
use notes_core::model::{
    LeaderboardEntry, LoginForm, NoteFile, Quiz, QuizRecord, QuizResult, Session, SignupForm,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::{
    AuthReply, ErrorBody, GenerateQuizReply, HistoryReply, LeaderboardReply, NotesApi,
    QuizRequest, UploadReply,
};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// `NotesApi` over HTTP. Keeps a cookie jar so the server-side session
/// follows the client between calls.
#[derive(Clone)]
pub struct HttpNotesApi {
    client: Client,
    base_url: Url,
}

impl HttpNotesApi {
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url().clone(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn me(&self) -> Result<Session, ApiError> {
        let response = self.client.get(self.endpoint("me")?).send().await?;
        read_json(response).await
    }

    async fn upload(&self, file: NoteFile) -> Result<String, ApiError> {
        debug!(file = file.file_name(), bytes = file.bytes().len(), "uploading note file");
        let file_name = file.file_name().to_string();
        let mime = file.mime();
        let part = Part::bytes(file.into_bytes())
            .file_name(file_name)
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint("upload")?)
            .multipart(form)
            .send()
            .await?;
        let reply: UploadReply = read_json(response).await?;
        Ok(reply.summary)
    }

    async fn generate_quiz(&self, request: &QuizRequest) -> Result<Quiz, ApiError> {
        debug!(difficulty = %request.difficulty, "requesting quiz");
        let response = self
            .client
            .post(self.endpoint("generate_quiz")?)
            .json(request)
            .send()
            .await?;
        let reply: GenerateQuizReply = read_json(response).await?;
        Ok(reply.quiz)
    }

    async fn save_quiz(&self, result: &QuizResult) -> Result<serde_json::Value, ApiError> {
        debug!(score = result.score, total = result.total, "saving quiz result");
        let response = self
            .client
            .post(self.endpoint("save_quiz")?)
            .json(result)
            .send()
            .await?;
        read_json(response).await
    }

    async fn signup(&self, form: &SignupForm) -> Result<AuthReply, ApiError> {
        debug!(email = %form.email, "creating account");
        let response = self
            .client
            .post(self.endpoint("signup")?)
            .json(form)
            .send()
            .await?;
        read_lenient_reply(response).await
    }

    async fn login(&self, form: &LoginForm) -> Result<AuthReply, ApiError> {
        debug!(email = %form.email, "signing in");
        let response = self
            .client
            .post(self.endpoint("login")?)
            .json(form)
            .send()
            .await?;
        read_lenient_reply(response).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.client.post(self.endpoint("logout")?).send().await?;
        let _: serde_json::Value = read_json(response).await?;
        Ok(())
    }

    async fn quiz_history(&self) -> Result<Vec<QuizRecord>, ApiError> {
        let mut url = self.endpoint("dashboard")?;
        url.query_pairs_mut().append_pair("format", "json");
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let reply: HistoryReply = read_json(response).await?;
        Ok(reply.quizzes)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let response = self.client.get(self.endpoint("leaderboard")?).send().await?;
        let reply: LeaderboardReply = read_json(response).await?;
        Ok(reply.leaderboard)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

// Auth replies may be any JSON on success; keep whatever fields match.
async fn read_lenient_reply(response: Response) -> Result<AuthReply, ApiError> {
    let response = check_status(response).await?;
    let value: serde_json::Value = response.json().await?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_message);
    Err(ApiError::server(status, message))
}
