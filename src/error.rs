/// Result type used across the visualizer.
pub type BreathingResult<T> = Result<T, BreathingError>;

#[derive(Debug, thiserror::Error)]
pub enum BreathingError {
    /// Writing the banner or status line failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
