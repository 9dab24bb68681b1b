use std::path::PathBuf;

/// Reasons a move can be rejected. A rejected move never changes engine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("target is outside the board")]
    OutOfRange,

    #[error("game is already over")]
    GameOver,

    #[error("it is not this player's turn")]
    NotYourTurn,

    #[error("column is full")]
    ColumnFull,

    #[error("stone would not rest on the lowest empty row")]
    InvalidDrop,
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
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull.to_string(), "column is full");
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rules section is malformed".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: rules section is malformed"
        );
    }

    #[test]
    fn test_file_read_error_names_path() {
        let err = ConfigError::FileRead {
            path: PathBuf::from("game.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to read config file game.toml: denied");
    }
}
