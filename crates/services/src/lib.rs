#![forbid(unsafe_code)]

pub mod api;
pub mod auth_state;
pub mod config;
pub mod error;
pub mod http_api;
pub mod notes_service;
pub mod page_state;
pub mod session_gate;
pub mod status;

pub use api::{AuthReply, NotesApi, QuizRequest};
pub use auth_state::{LoginState, SignupState};
pub use config::ApiConfig;
pub use error::{Action, ActionError, ApiError, ConfigError, InputError};
pub use http_api::HttpNotesApi;
pub use notes_service::NotesService;
pub use page_state::{Delivery, PageState, QuizPanel, RequestKind, RequestToken, Section};
pub use session_gate::{DASHBOARD_PATH, GateDecision, LOGIN_PATH, gate};
pub use status::{Status, Tone};

pub use reqwest::StatusCode;
