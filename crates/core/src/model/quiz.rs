use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//
// ─── QUESTIONS ────────────────────────────────────────────────────────────────
//

/// One multiple-choice question.
///
/// Options are keyed by letter. The server does not guarantee key order, so
/// they are held sorted by letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = (String, String)>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().collect(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn is_correct(&self, selected: Option<&str>) -> bool {
        selected.is_some_and(|letter| letter == self.answer)
    }
}

/// A generated quiz. Question order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Radio group name for the question at `index` (`q0`, `q1`, ...).
    #[must_use]
    pub fn input_name(index: usize) -> String {
        format!("q{index}")
    }
}

//
// ─── SELECTIONS ───────────────────────────────────────────────────────────────
//

/// Chosen option letter per question index. At most one per question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections(BTreeMap<usize, String>);

impl Selections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: usize, letter: impl Into<String>) {
        self.0.insert(index, letter.into());
    }

    #[must_use]
    pub fn selected(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

/// Outcome of one quiz submission; also the `/save_quiz` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub questions: Vec<Question>,
}

impl QuizResult {
    /// Score a quiz against the current selections. Unanswered questions
    /// count as wrong.
    #[must_use]
    pub fn grade(quiz: &Quiz, selections: &Selections) -> Self {
        let score = quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(index, question)| question.is_correct(selections.selected(*index)))
            .count();

        Self {
            score: u32::try_from(score).unwrap_or(u32::MAX),
            total: u32::try_from(quiz.len()).unwrap_or(u32::MAX),
            questions: quiz.questions.clone(),
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}
