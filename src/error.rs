use std::path::PathBuf;

/// Errors that can occur during checkpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckpointError {
    #[error("not a checkpoint directory: {0}")]
    NotADirectory(PathBuf),

    #[error("max_keep must be >= 1, got {0}")]
    InvalidMaxKeep(usize),

    #[error("checkpoint path has no parent directory or file name: {0}")]
    InvalidPath(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_error_display() {
        let err = CheckpointError::NotADirectory(PathBuf::from("checkpoints"));
        assert_eq!(err.to_string(), "not a checkpoint directory: checkpoints");
    }

    #[test]
    fn test_invalid_max_keep_display() {
        let err = CheckpointError::InvalidMaxKeep(0);
        assert_eq!(err.to_string(), "max_keep must be >= 1, got 0");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("checkpoint.max_keep must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: checkpoint.max_keep must be >= 1"
        );
    }
}
