//! Run configuration resolved from the process environment.
//!
//! Resolution happens exactly once, before any other stage runs; every
//! downstream component takes the resulting value as an explicit input and
//! never re-reads the environment.

use std::env;

use crate::error::{Error, Result};

/// Environment variable holding the completion-service credential.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// Environment variable overriding the model identifier.
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Environment variable enabling debug-mode prompt/response dumps.
pub const DEBUG_VAR: &str = "DEBUG_MODE";
/// Environment variable overriding the path shown in user-facing output.
/// Display only, never used for file I/O.
pub const DISPLAY_PATH_VAR: &str = "HOST_REPO_PATH";

/// Model used when `GEMINI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Immutable run configuration. Constructed once per run via [`Config::from_env`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion-service credential. Never empty.
    pub api_key: String,

    /// Model identifier sent to the completion service.
    pub model: String,

    /// When set, the full prompt and response are emitted at DEBUG level.
    pub debug: bool,

    /// Optional override for the repository path shown in logs.
    pub display_path: Option<String>,
}

impl Config {
    /// Resolve configuration from the process environment.
    ///
    /// Fails with [`Error::Configuration`] when the credential variable is
    /// unset or empty. The model identifier falls back to [`DEFAULT_MODEL`].
    /// The debug flag is a case-insensitive comparison against `"true"`; any
    /// other value, including absence, yields `false`.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!("{API_KEY_VAR} environment variable not set"))
            })?;

        let model = env::var(MODEL_VAR)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let debug = env::var(DEBUG_VAR)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let display_path = env::var(DISPLAY_PATH_VAR).ok().filter(|p| !p.is_empty());

        Ok(Config { api_key, model, debug, display_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var(API_KEY_VAR);
        env::remove_var(MODEL_VAR);
        env::remove_var(DEBUG_VAR);
        env::remove_var(DISPLAY_PATH_VAR);
    }

    #[test]
    #[serial]
    fn missing_credential_is_a_configuration_error() {
        clear_env();
        let err = Config::from_env().expect_err("config should fail without credential");
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_VAR));
    }

    #[test]
    #[serial]
    fn empty_credential_is_a_configuration_error() {
        clear_env();
        env::set_var(API_KEY_VAR, "");
        let err = Config::from_env().expect_err("config should fail with empty credential");
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    #[serial]
    fn model_falls_back_to_default() {
        clear_env();
        env::set_var(API_KEY_VAR, "test-key");
        let config = Config::from_env().expect("config");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(!config.debug);
        assert!(config.display_path.is_none());
    }

    #[test]
    #[serial]
    fn debug_flag_compares_case_insensitively() {
        clear_env();
        env::set_var(API_KEY_VAR, "test-key");

        env::set_var(DEBUG_VAR, "TRUE");
        assert!(Config::from_env().expect("config").debug);

        env::set_var(DEBUG_VAR, "True");
        assert!(Config::from_env().expect("config").debug);

        env::set_var(DEBUG_VAR, "1");
        assert!(!Config::from_env().expect("config").debug);

        env::set_var(DEBUG_VAR, "false");
        assert!(!Config::from_env().expect("config").debug);
    }

    #[test]
    #[serial]
    fn overrides_are_picked_up() {
        clear_env();
        env::set_var(API_KEY_VAR, "test-key");
        env::set_var(MODEL_VAR, "gemini-2.0-pro");
        env::set_var(DISPLAY_PATH_VAR, "/host/project");

        let config = Config::from_env().expect("config");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.display_path.as_deref(), Some("/host/project"));
    }
}
