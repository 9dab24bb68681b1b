use std::path::Path;

use crate::error::ConfigError;
use crate::game::Rules;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub rules: Rules,
    pub display: DisplayConfig,
}

/// Symbols used when printing a board as text.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub empty: char,
    pub player_a: char,
    pub player_b: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: '.',
            player_a: 'X',
            player_b: 'O',
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [
            ("display.empty", self.display.empty),
            ("display.player_a", self.display.player_a),
            ("display.player_b", self.display.player_b),
        ];
        for (name, symbol) in symbols {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a visible character"
                )));
            }
        }
        let d = &self.display;
        if d.empty == d.player_a || d.empty == d.player_b || d.player_a == d.player_b {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FullBoardPrecedence;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rules.full_board, FullBoardPrecedence::Draw);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[rules]
full_board = "win"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rules.full_board, FullBoardPrecedence::Win);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unknown_precedence_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[rules]\nfull_board = \"loss\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[rules]\nrows = 8\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_symbols() {
        let mut config = AppConfig::default();
        config.display.player_b = 'X';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_symbol() {
        let mut config = AppConfig::default();
        config.display.empty = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[display]
player_a = "R"
player_b = "Y"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.display.player_a, 'R');
        assert_eq!(config.display.player_b, 'Y');
        // Others are defaults
        assert_eq!(config.display.empty, '.');
        assert_eq!(config.rules, Rules::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[display]\nplayer_a = \"O\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = AppConfig::load(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        assert!(toml_str.contains("full_board = \"draw\""));
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
