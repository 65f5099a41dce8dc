mod difficulty;
mod forms;
mod history;
mod ids;
mod note_file;
mod quiz;
mod summary;
mod user;

pub use difficulty::{Difficulty, DifficultyError};
pub use forms::{LoginForm, SignupForm};
pub use history::{LeaderboardEntry, QuizRecord};
pub use ids::UserId;
pub use note_file::{NoteFile, NoteKind};
pub use quiz::{Question, Quiz, QuizResult, Selections};
pub use summary::{Summary, SummaryError};
pub use user::{Session, UserRef};
