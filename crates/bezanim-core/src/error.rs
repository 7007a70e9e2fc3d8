use thiserror::Error;

#[derive(Debug, Error)]
pub enum BezanimError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl BezanimError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, BezanimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BezanimError::invalid_argument("duration must be positive");
        assert_eq!(err.to_string(), "Invalid argument: duration must be positive");

        let err = BezanimError::Geometry("5 control points".into());
        assert_eq!(err.to_string(), "Geometry error: 5 control points");

        let err = BezanimError::Serialize("key must be a string".into());
        assert_eq!(err.to_string(), "Serialization error: key must be a string");
    }
}
