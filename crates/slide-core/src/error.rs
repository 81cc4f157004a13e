use thiserror::Error;

/// Misuse of the carousel API. None of these come from I/O; they flag a caller
/// asking for something the current state cannot satisfy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("slide index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("no drag gesture in progress")]
    NoActiveDrag,
    #[error("carousel has no slides")]
    EmptyTrack,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
