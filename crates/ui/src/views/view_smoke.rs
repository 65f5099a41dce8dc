use dioxus::prelude::WritableExt;
use notes_core::model::{LeaderboardEntry, NoteFile, Question, Quiz, QuizRecord};

use super::test_harness::{FakeApi, ViewKind, setup_view_harness, setup_view_harness_with_api};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_app_name_and_links() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Notes2Quiz"), "missing app name in {html}");
    assert!(html.contains("Go to dashboard"), "missing dashboard link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_hidden_sections() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"uploadForm\""), "missing upload form in {html}");
    assert!(html.contains("id=\"fileInput\""), "missing file input in {html}");
    assert!(html.contains("id=\"genQuizBtn\""), "missing generate button in {html}");
    assert!(html.contains("section hidden"), "sections should start hidden: {html}");
    assert!(!html.contains("resultArea"), "no result before a submission: {html}");
    for level in ["Easy", "Medium", "Hard"] {
        assert!(html.contains(level), "missing difficulty {level} in {html}");
    }
    assert!(harness.api.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn signup_view_smoke_renders_three_fields() {
    let mut harness = setup_view_harness(ViewKind::Signup);
    harness.rebuild();
    let html = harness.render();
    for id in ["signupForm", "signupName", "signupEmail", "signupPassword", "signupStatus"] {
        let needle = format!("id=\"{id}\"");
        assert!(html.contains(&needle), "missing {needle} in {html}");
    }
    assert!(harness.api.calls().is_empty(), "signup must wait for a submit");
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"loginForm\""), "missing login form in {html}");
    assert!(html.contains("Create an account"), "missing signup link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_record_card() {
    let api = FakeApi {
        history: Some(vec![QuizRecord {
            score: Some(3),
            total: Some(5),
            summary: None,
            questions: Vec::new(),
            date: "2024-03-05T10:00:00".to_string(),
        }]),
        ..FakeApi::default()
    };
    let mut harness = setup_view_harness_with_api(ViewKind::History, api);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("3 / 5"), "missing score in {html}");
    assert!(html.contains("Mar 5, 2024"), "missing date in {html}");
    assert_eq!(harness.api.calls(), vec!["quiz_history"]);
}

#[tokio::test(flavor = "current_thread")]
async fn history_view_smoke_renders_fallback_error() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Retry"), "missing retry button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_ranks_rows_in_server_order() {
    let api = FakeApi {
        leaderboard: Some(vec![
            LeaderboardEntry {
                name: "Ada".to_string(),
                score: 5,
                total: 5,
                date: "2024-03-05".to_string(),
            },
            LeaderboardEntry {
                name: "Grace".to_string(),
                score: 4,
                total: 5,
                date: "2024-03-04".to_string(),
            },
        ]),
        ..FakeApi::default()
    };
    let mut harness = setup_view_harness_with_api(ViewKind::Leaderboard, api);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    let ada = html.find("Ada").expect("Ada row");
    let grace = html.find("Grace").expect("Grace row");
    assert!(ada < grace, "rows out of order in {html}");
    assert!(html.contains("4 / 5"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_empty_board() {
    let api = FakeApi {
        leaderboard: Some(Vec::new()),
        ..FakeApi::default()
    };
    let mut harness = setup_view_harness_with_api(ViewKind::Leaderboard, api);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Nobody has finished a quiz yet."), "missing empty text in {html}");
}

fn organelle_quiz() -> Quiz {
    Quiz::new(vec![Question::new(
        "Which organelle makes energy?",
        [
            ("A".into(), "Nucleus".into()),
            ("B".into(), "Mitochondria".into()),
        ],
        "B",
    )])
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_quiz_without_answers_and_saves_once() {
    let api = FakeApi {
        summary: Some("**Cells** make energy".to_string()),
        quiz: Some(organelle_quiz()),
        ..FakeApi::default()
    };
    let mut harness = setup_view_harness_with_api(ViewKind::Dashboard, api);
    harness.rebuild();
    let dashboard = harness.dashboard();

    harness.dom.in_runtime(|| {
        let mut picked = dashboard.picked_file;
        picked.set(Some(NoteFile::new("bio.txt", b"cells".to_vec())));
        dashboard.upload.call(());
    });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Cells make energy"), "missing cleaned summary in {html}");

    harness.dom.in_runtime(|| dashboard.generate.call(()));
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("name=\"q0\""), "missing radio group q0 in {html}");
    assert!(html.contains("Q1:"), "missing question number in {html}");
    assert!(html.contains("A) Nucleus"), "missing option A in {html}");
    assert!(html.contains("B) Mitochondria"), "missing option B in {html}");
    assert!(html.contains("Submit Quiz"), "missing submit button in {html}");
    assert!(!html.to_lowercase().contains("answer"), "answer leaked into {html}");
    assert_eq!(html.matches("value=\"B\"").count(), 1, "B outside its radio in {html}");
    assert_eq!(html.matches("value=\"A\"").count(), 1, "A outside its radio in {html}");

    harness.dom.in_runtime(|| {
        dashboard.select.call((0, "B".to_string()));
        dashboard.submit.call(());
    });
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("resultArea"), "missing result area in {html}");
    assert!(html.contains("Score: 0"), "counter should start at zero in {html}");
    assert_eq!(harness.api.calls(), vec!["upload", "generate_quiz", "save_quiz"]);
}
