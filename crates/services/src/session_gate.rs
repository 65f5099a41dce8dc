use notes_core::model::Session;

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Stay,
    RedirectToLogin,
}

/// Only the dashboard requires a session; every other page is public.
#[must_use]
pub fn gate(session: &Session, path: &str) -> GateDecision {
    if !session.is_signed_in() && path.trim_end_matches('/') == DASHBOARD_PATH {
        GateDecision::RedirectToLogin
    } else {
        GateDecision::Stay
    }
}
