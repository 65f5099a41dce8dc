mod dashboard;
mod history;
mod home;
mod leaderboard;
mod login;
mod signup;
mod state;
mod status_line;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use history::HistoryView;
pub use home::HomeView;
pub use leaderboard::LeaderboardView;
pub use login::LoginView;
pub use signup::SignupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use status_line::StatusLine;
