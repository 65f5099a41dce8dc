mod history_vm;
mod quiz_vm;
mod score_counter;
mod status_vm;
mod time_fmt;

pub use history_vm::{
    LeaderboardRowVm, QuizRecordCardVm, map_leaderboard, map_quiz_records,
};
pub use quiz_vm::{OptionVm, QuestionVm, map_quiz};
pub use score_counter::{SCORE_STEP, ScoreCounter};
pub use status_vm::StatusVm;
