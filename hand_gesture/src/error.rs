use thiserror::Error;

/// Reasons a landmark frame from the estimator can't be used.
#[derive(Debug, Error)]
pub enum LandmarkError {
    #[error("malformed landmark frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hand {hand}: expected {expected} landmarks, got {found}")]
    WrongCount { hand: usize, expected: usize, found: usize },

    #[error("hand {hand}: landmark {index} has a non-finite coordinate")]
    NonFinite { hand: usize, index: usize },

    #[error("frame reports {0} hands; at most 2 are tracked")]
    TooManyHands(usize),

    #[error("estimator error: {0}")]
    Estimator(String),
}

pub type Result<T> = std::result::Result<T, LandmarkError>;
