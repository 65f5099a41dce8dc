use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    #[error("summary is empty")]
    Empty,
}

/// Server-generated summary of an uploaded note file.
///
/// The raw text is kept verbatim because it is what gets sent back for quiz
/// generation. Only the display form drops the markup characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    /// Wrap a raw summary string.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::Empty` when the string is empty, since an empty
    /// summary cannot seed a quiz.
    pub fn parse(raw: impl Into<String>) -> Result<Self, SummaryError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(SummaryError::Empty);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Text suitable for display: `*` and `#` removed, outer whitespace trimmed.
    #[must_use]
    pub fn display_text(&self) -> String {
        clean_summary_text(&self.0)
    }
}

fn clean_summary_text(text: &str) -> String {
    text.replace(['*', '#'], "").trim().to_string()
}
