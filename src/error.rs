use thiserror::Error;

/// Top-level error type for the triclip crate.
#[derive(Debug, Error)]
pub enum TriclipError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the input geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("polygon needs at least 3 points, got {0}")]
    NotEnoughPoints(usize),
}

/// Errors raised while running an operation on valid input.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("boundary walk did not return to the entry point after {steps} steps")]
    TraversalNotClosed { steps: usize },

    #[error("no ear found among {remaining} remaining points")]
    NoEar { remaining: usize },
}

/// Convenience type alias for results using [`TriclipError`].
pub type Result<T> = std::result::Result<T, TriclipError>;
