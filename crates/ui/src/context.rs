use std::sync::Arc;

use dioxus::prelude::*;
use notes_core::model::Session;
use services::NotesService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn notes(&self) -> NotesService;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    notes: NotesService,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name().to_string(),
            notes: app.notes(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn notes(&self) -> NotesService {
        self.notes.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Session as last reported by the server; `None` until the first check
/// has finished.
#[derive(Clone, Copy)]
pub struct CurrentSession(Signal<Option<Session>>);

impl CurrentSession {
    #[must_use]
    pub fn new(signal: Signal<Option<Session>>) -> Self {
        Self(signal)
    }

    #[must_use]
    pub fn get(&self) -> Option<Session> {
        self.0.read().clone()
    }

    pub fn set(&mut self, session: Session) {
        self.0.set(Some(session));
    }
}
