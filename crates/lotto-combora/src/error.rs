/// Error types for panel, ticket and picker operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LottoError {
    #[error("Number sequence is missing")]
    NullArgument,

    #[error("Number {0} is out of range (1-50)")]
    OutOfRange(i32),

    #[error("Number {0} appears more than once")]
    DuplicateValue(i32),

    #[error("Too many numbers: a panel holds at most 6, got {0}")]
    TooManyNumbers(usize),

    #[error("Maximum number of panels reached")]
    CapacityExceeded,

    #[error("Invalid count {0}: expected 1-50")]
    InvalidArgument(usize),

    #[error("Too few panels: a ticket needs at least 2, got {0}")]
    TooFewPanels(usize),

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),
}

pub type Result<T, E = LottoError> = std::result::Result<T, E>;
