use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// A display write fell outside the character grid
    #[error("cell ({row}, {col}) is outside the display surface")]
    OutOfBounds { row: usize, col: usize },
    /// The key source has no more input
    #[error("input stream closed")]
    InputClosed,
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_names_the_cell() {
        let err = GameError::OutOfBounds { row: 25, col: 3 };
        assert_eq!(err.to_string(), "cell (25, 3) is outside the display surface");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
