use std::time::Duration;

/// Delay between two counter frames.
pub const SCORE_STEP: Duration = Duration::from_millis(100);

/// Frames of the decorative score counter. The authoritative score is the
/// `QuizResult`; nothing reads these frames back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreCounter {
    score: u32,
    total: u32,
}

impl ScoreCounter {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// `Score: 0` first, then one `Score: n / total` per step up to the score.
    #[must_use]
    pub fn frames(&self) -> Vec<String> {
        std::iter::once("Score: 0".to_string())
            .chain((0..=self.score).map(|current| format!("Score: {current} / {}", self.total)))
            .collect()
    }
}
