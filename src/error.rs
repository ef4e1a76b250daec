use thiserror::Error;

pub type Result<T> = std::result::Result<T, GroupingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GroupingError {
    /// A detection whose polygon can't be reduced to a bounding box.
    #[error("invalid detection at index {index}: {reason}")]
    InvalidDetection { index: usize, reason: String },

    /// The detector produced nothing for this image.
    #[error("no text detected")]
    NoTextDetected,

    #[error("invalid value {value} for option `{name}`")]
    InvalidOptions { name: &'static str, value: f32 },
}

impl GroupingError {
    /// `true` for the empty-but-successful outcome, which callers usually
    /// report rather than treat as a failure.
    pub fn is_no_text(&self) -> bool {
        matches!(self, GroupingError::NoTextDetected)
    }
}
