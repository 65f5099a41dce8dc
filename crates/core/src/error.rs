use thiserror::Error;

use crate::model::{DifficultyError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
}
