use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use notes_core::model::{
    LeaderboardEntry, LoginForm, NoteFile, Quiz, QuizRecord, QuizResult, Session, SignupForm,
};
use services::{ApiError, AuthReply, NotesApi, NotesService, QuizRequest, StatusCode};

use crate::context::{CurrentSession, UiApp, build_app_context};
use crate::views::dashboard::{DashboardHandles, DashboardTestHandles};
use crate::views::{
    DashboardView, HistoryView, HomeView, LeaderboardView, LoginView, SignupView,
};

/// Canned server replies for view tests. `None` makes the call fail with a
/// bare 500.
#[derive(Default)]
pub struct FakeApi {
    pub summary: Option<String>,
    pub quiz: Option<Quiz>,
    pub history: Option<Vec<QuizRecord>>,
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
    pub(crate) calls: Mutex<Vec<&'static str>>,
}

impl FakeApi {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }
}

fn server_failure() -> ApiError {
    ApiError::server(StatusCode::INTERNAL_SERVER_ERROR, None)
}

#[async_trait]
impl NotesApi for FakeApi {
    async fn me(&self) -> Result<Session, ApiError> {
        self.record("me");
        Ok(Session::signed_out())
    }

    async fn upload(&self, _file: NoteFile) -> Result<String, ApiError> {
        self.record("upload");
        self.summary.clone().ok_or_else(server_failure)
    }

    async fn generate_quiz(&self, _request: &QuizRequest) -> Result<Quiz, ApiError> {
        self.record("generate_quiz");
        self.quiz.clone().ok_or_else(server_failure)
    }

    async fn save_quiz(&self, _result: &QuizResult) -> Result<serde_json::Value, ApiError> {
        self.record("save_quiz");
        Err(server_failure())
    }

    async fn signup(&self, _form: &SignupForm) -> Result<AuthReply, ApiError> {
        self.record("signup");
        Ok(AuthReply::default())
    }

    async fn login(&self, _form: &LoginForm) -> Result<AuthReply, ApiError> {
        self.record("login");
        Err(server_failure())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        Ok(())
    }

    async fn quiz_history(&self) -> Result<Vec<QuizRecord>, ApiError> {
        self.record("quiz_history");
        self.history.clone().ok_or_else(server_failure)
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, ApiError> {
        self.record("leaderboard");
        self.leaderboard.clone().ok_or_else(server_failure)
    }
}

struct TestApp {
    api: Arc<FakeApi>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Notes2Quiz"
    }

    fn notes(&self) -> NotesService {
        NotesService::new(self.api.clone())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Dashboard,
    Signup,
    Login,
    History,
    Leaderboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    dashboard_handles: Option<DashboardTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| CurrentSession::new(Signal::new(None)));
    use_context_provider(|| props.view);
    if let Some(handles) = props.dashboard_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Signup => rsx! { SignupView {} },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::History => rsx! { HistoryView {} },
        ViewKind::Leaderboard => rsx! { LeaderboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeApi>,
    pub dashboard_handles: Option<DashboardTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive a few rounds so spawned requests finish and re-render.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn dashboard(&self) -> DashboardHandles {
        self.dashboard_handles
            .as_ref()
            .expect("dashboard harness")
            .get()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_api(view, FakeApi::default())
}

pub fn setup_view_harness_with_api(view: ViewKind, api: FakeApi) -> ViewHarness {
    let api = Arc::new(api);
    let app = Arc::new(TestApp { api: api.clone() });
    let dashboard_handles = match view {
        ViewKind::Dashboard => Some(DashboardTestHandles::default()),
        _ => None,
    };
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            dashboard_handles: dashboard_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        api,
        dashboard_handles,
    }
}
