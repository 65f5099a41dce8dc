use notes_core::model::{LeaderboardEntry, QuizRecord};

use crate::vm::time_fmt::format_day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizRecordCardVm {
    pub date_str: String,
    pub score_str: String,
    pub question_count: usize,
    pub summary_preview: Option<String>,
}

const SUMMARY_PREVIEW_CHARS: usize = 120;

impl From<&QuizRecord> for QuizRecordCardVm {
    fn from(record: &QuizRecord) -> Self {
        let score_str = match (record.score, record.total) {
            (Some(score), Some(total)) => format!("{score} / {total}"),
            _ => "Not taken yet".to_string(),
        };
        Self {
            date_str: format_day(record.played_on(), &record.date),
            score_str,
            question_count: record.questions.len(),
            summary_preview: record.summary.as_deref().map(preview),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub name: String,
    pub score_str: String,
    pub date_str: String,
}

#[must_use]
pub fn map_quiz_records(records: &[QuizRecord]) -> Vec<QuizRecordCardVm> {
    records.iter().map(QuizRecordCardVm::from).collect()
}

#[must_use]
pub fn map_leaderboard(entries: &[LeaderboardEntry]) -> Vec<LeaderboardRowVm> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| LeaderboardRowVm {
            rank: idx + 1,
            name: entry.name.clone(),
            score_str: format!("{} / {}", entry.score, entry.total),
            date_str: format_day(entry.played_on(), &entry.date),
        })
        .collect()
}

fn preview(summary: &str) -> String {
    let flat = summary.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= SUMMARY_PREVIEW_CHARS {
        return flat;
    }
    let cut: String = flat.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    format!("{}...", cut.trim_end())
}
