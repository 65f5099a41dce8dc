use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::Question;

/// A quiz stored against the signed-in user.
///
/// Records written by `/upload` carry a summary but no score; records
/// written by `/save_quiz` carry a score but no summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub date: String,
}

impl QuizRecord {
    #[must_use]
    pub fn played_on(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    pub total: u32,
    #[serde(default)]
    pub date: String,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn played_on(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

// Dates arrive either as `YYYY-MM-DD` or as a naive ISO timestamp.
fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}
