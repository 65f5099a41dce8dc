use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use notes_core::model::{Difficulty, LoginForm, NoteFile, Question, QuizResult, SignupForm};
use serde_json::{Value, json};
use services::{ApiConfig, ApiError, HttpNotesApi, NotesApi, QuizRequest};

#[derive(Clone, Default)]
struct Recorded {
    uploads: Arc<Mutex<Vec<(String, String, Vec<u8>)>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn me() -> Json<Value> {
    Json(json!({"user": {"id": 1, "name": "John Doe", "email": "john@example.com"}}))
}

async fn upload(State(rec): State<Recorded>, mut multipart: Multipart) -> impl IntoResponse {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.unwrap().to_vec();
        rec.uploads.lock().unwrap().push((name, file_name, bytes));
    }
    Json(json!({"summary": "**Cells** are small"}))
}

async fn generate_quiz(State(rec): State<Recorded>, Json(body): Json<Value>) -> impl IntoResponse {
    rec.bodies.lock().unwrap().push(body);
    Json(json!({"quiz": {"questions": [
        {"question": "What is small?", "options": {"B": "Cells", "A": "Whales"}, "answer": "B"}
    ]}}))
}

async fn save_quiz(State(rec): State<Recorded>, Json(body): Json<Value>) -> impl IntoResponse {
    rec.bodies.lock().unwrap().push(body);
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Not logged in"})))
}

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "Email already registered"})),
        );
    }
    (StatusCode::OK, Json(json!({"success": true, "message": "ok"})))
}

async fn login() -> impl IntoResponse {
    (StatusCode::UNAUTHORIZED, "<html>nope</html>")
}

async fn dashboard(
    State(rec): State<Recorded>,
    Query(query): Query<std::collections::HashMap<String, String>>,
) -> Json<Value> {
    rec.queries
        .lock()
        .unwrap()
        .push(query.get("format").cloned().unwrap_or_default());
    Json(json!({"quizzes": [{"score": 2, "total": 3, "questions": [], "date": "2025-08-10T09:00:00.000001"}]}))
}

async fn leaderboard() -> Json<Value> {
    Json(json!({"leaderboard": [{"name": "John Doe", "score": 9, "total": 10, "date": "2025-08-10"}]}))
}

async fn spawn_server() -> (HttpNotesApi, Recorded) {
    let rec = Recorded::default();
    let app = Router::new()
        .route("/me", get(me))
        .route("/upload", post(upload))
        .route("/generate_quiz", post(generate_quiz))
        .route("/save_quiz", post(save_quiz))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/dashboard", get(dashboard))
        .route("/leaderboard", get(leaderboard))
        .with_state(rec.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ApiConfig::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    (HttpNotesApi::new(&config).unwrap(), rec)
}

#[tokio::test]
async fn me_decodes_signed_in_user() {
    let (api, _rec) = spawn_server().await;
    let session = api.me().await.unwrap();
    assert_eq!(session.user().unwrap().name, "John Doe");
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let (api, rec) = spawn_server().await;
    let summary = api
        .upload(NoteFile::new("bio.txt", b"mitochondria".to_vec()))
        .await
        .unwrap();

    assert_eq!(summary, "**Cells** are small");
    let uploads = rec.uploads.lock().unwrap().clone();
    assert_eq!(
        uploads,
        vec![("file".to_string(), "bio.txt".to_string(), b"mitochondria".to_vec())]
    );
}

#[tokio::test]
async fn generate_quiz_posts_json_body() {
    let (api, rec) = spawn_server().await;
    let quiz = api
        .generate_quiz(&QuizRequest {
            summary: "**Cells** are small".into(),
            difficulty: Difficulty::Hard,
        })
        .await
        .unwrap();

    assert_eq!(quiz.len(), 1);
    assert_eq!(quiz.questions[0].answer, "B");
    let bodies = rec.bodies.lock().unwrap().clone();
    assert_eq!(
        bodies,
        vec![json!({"summary": "**Cells** are small", "difficulty": "Hard"})]
    );
}

#[tokio::test]
async fn save_quiz_reports_server_error_and_sends_result() {
    let (api, rec) = spawn_server().await;
    let result = QuizResult {
        score: 1,
        total: 1,
        questions: vec![Question::new(
            "Q1",
            [("A".into(), "x".into()), ("B".into(), "y".into())],
            "B",
        )],
    };

    let err = api.save_quiz(&result).await.unwrap_err();

    match err {
        ApiError::Server { status, message } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(message.as_deref(), Some("Not logged in"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let bodies = rec.bodies.lock().unwrap().clone();
    assert_eq!(bodies[0]["score"], 1);
    assert_eq!(bodies[0]["total"], 1);
    assert_eq!(bodies[0]["questions"][0]["question"], "Q1");
}

#[tokio::test]
async fn signup_failure_surfaces_message_field() {
    let (api, _rec) = spawn_server().await;
    let form = SignupForm {
        name: "Ada".into(),
        email: "taken@example.com".into(),
        password: "pw".into(),
    };
    let err = api.signup(&form).await.unwrap_err();
    assert!(
        matches!(err, ApiError::Server { message: Some(ref m), .. } if m == "Email already registered")
    );
}

#[tokio::test]
async fn non_json_error_body_has_no_message() {
    let (api, _rec) = spawn_server().await;
    let err = api.login(&LoginForm::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { message: None, .. }));
}

#[tokio::test]
async fn history_requests_json_format() {
    let (api, rec) = spawn_server().await;
    let records = api.quiz_history().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].score, Some(2));
    assert_eq!(rec.queries.lock().unwrap().clone(), vec!["json".to_string()]);
}

#[tokio::test]
async fn leaderboard_decodes_entries() {
    let (api, _rec) = spawn_server().await;
    let entries = api.leaderboard().await.unwrap();
    assert_eq!(entries[0].name, "John Doe");
    assert_eq!((entries[0].score, entries[0].total), (9, 10));
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let config = ApiConfig::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let api = HttpNotesApi::new(&config).unwrap();

    let err = api.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
}
