use thiserror::Error;

/// Top-level error type for path orthogonalization.
#[derive(Debug, Error)]
pub enum OrthoError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while validating a source path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("closed path with {count} nodes will just collapse, at least 5 are required")]
    TooFewNodes { count: usize },

    #[error("path must be closed")]
    NotClosed,
}

/// Errors raised by the orthogonalization itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    #[error("degenerate direction: path edges cancel out to a zero-length base vector")]
    DegenerateDirection,

    #[error("degenerate shape: edges form {groups} direction group(s), at least 4 are required")]
    DegenerateShape { groups: usize },

    #[error("collapse degenerated the shape to {groups} direction group(s)")]
    CollapsedShape { groups: usize },

    #[error("collapse still finds short edges after {passes} pass(es)")]
    CollapseLimit { passes: usize },
}

/// Errors raised while reading a path from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid coordinate `{token}`")]
    InvalidNumber { token: String },
}

/// Convenience type alias for results using [`OrthoError`].
pub type Result<T> = std::result::Result<T, OrthoError>;
