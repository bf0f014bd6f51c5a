//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `MSF_API_BASE_URL`: Game API base URL (optional)
//! - `MSF_API_KEY`: Static `x-api-key` value
//! - `MSF_TOKEN_URL`: OAuth token endpoint (optional)
//! - `MSF_CLIENT_ID`: OAuth client id
//! - `MSF_CLIENT_SECRET`: OAuth client secret
//! - `MSF_ACCESS_TOKEN`: Initial access token
//! - `MSF_REFRESH_TOKEN`: Initial refresh token
//! - `MSF_REQUEST_TIMEOUT_SECS`: Per-request timeout in seconds (optional)
//! - `MSF_FETCH_RETRIES`: Default retry budget (optional)
//! - `MSF_ABORT_ON_REFRESH_FAILURE`: Stop fetching when a refresh fails
//!   (true/false, optional)
//! - `MSF_PLAYER_CARD_CACHE_TTL_SECS`: Player card cache TTL, 0 disables
//!   (optional)
//! - `MSF_DISABLE_PROXY`: Bypass system HTTP proxies (true/false, optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./msfchat.toml` or `./msfchat.json` (current working directory)
//! 2. `../msfchat.toml` or `../msfchat.json` (parent directory)
//! 3. `../../msfchat.toml` or `../../msfchat.json` (grandparent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use msfchat_domain::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_FETCH_RETRIES, DEFAULT_PLAYER_CARD_CACHE_TTL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOKEN_URL,
};
use msfchat_domain::{
    CacheConfig, Config, CredentialsConfig, FetchConfig, GameApiConfig, IdentityConfig,
    MsfChatError, RefreshFailurePolicy, Result,
};

const CONFIG_FILE_NAMES: [&str; 2] = ["msfchat.toml", "msfchat.json"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `MsfChatError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load from an explicit file when given, otherwise use [`load`]
///
/// # Errors
/// Returns `MsfChatError::Config` if the configuration cannot be loaded.
pub fn load_with_path(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load_from_file(Some(path)),
        None => load(),
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `MsfChatError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let api_key = env_var("MSF_API_KEY")?;
    let client_id = env_var("MSF_CLIENT_ID")?;
    let client_secret = env_var("MSF_CLIENT_SECRET")?;
    let access_token = env_var("MSF_ACCESS_TOKEN")?;
    let refresh_token = env_var("MSF_REFRESH_TOKEN")?;

    let base_url = env_or("MSF_API_BASE_URL", DEFAULT_API_BASE_URL);
    let token_url = env_or("MSF_TOKEN_URL", DEFAULT_TOKEN_URL);

    let timeout_secs = env_parse("MSF_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    let retries = env_parse("MSF_FETCH_RETRIES", DEFAULT_FETCH_RETRIES)?;
    let refresh_failure = if env_bool("MSF_ABORT_ON_REFRESH_FAILURE", false) {
        RefreshFailurePolicy::Abort
    } else {
        RefreshFailurePolicy::Continue
    };
    let player_card_ttl_secs =
        env_parse("MSF_PLAYER_CARD_CACHE_TTL_SECS", DEFAULT_PLAYER_CARD_CACHE_TTL_SECS)?;
    let disable_proxy = env_bool("MSF_DISABLE_PROXY", false);

    let config = Config {
        game_api: GameApiConfig { base_url, api_key: api_key.into() },
        identity: IdentityConfig { token_url, client_id, client_secret: client_secret.into() },
        credentials: CredentialsConfig {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        },
        fetch: FetchConfig { retries, timeout_secs, refresh_failure, disable_proxy },
        cache: CacheConfig { player_card_ttl_secs },
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `MsfChatError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing or empty
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(MsfChatError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            MsfChatError::Config(
                "No config file found and required MSF_* environment variables are missing"
                    .to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| MsfChatError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| MsfChatError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| MsfChatError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(MsfChatError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, up to two parents, then the
/// executable's directory and its parents.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `MsfChatError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        MsfChatError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `MsfChatError::Config` if the variable is set but not a number.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|e| MsfChatError::Config(format!("Invalid value for {}: {}", key, e))),
        _ => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use tempfile::{Builder, NamedTempFile};

    use super::*;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 12] = [
        "MSF_API_BASE_URL",
        "MSF_API_KEY",
        "MSF_TOKEN_URL",
        "MSF_CLIENT_ID",
        "MSF_CLIENT_SECRET",
        "MSF_ACCESS_TOKEN",
        "MSF_REFRESH_TOKEN",
        "MSF_REQUEST_TIMEOUT_SECS",
        "MSF_FETCH_RETRIES",
        "MSF_ABORT_ON_REFRESH_FAILURE",
        "MSF_PLAYER_CARD_CACHE_TTL_SECS",
        "MSF_DISABLE_PROXY",
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    fn set_required_env() {
        std::env::set_var("MSF_API_KEY", "api-key");
        std::env::set_var("MSF_CLIENT_ID", "client");
        std::env::set_var("MSF_CLIENT_SECRET", "secret");
        std::env::set_var("MSF_ACCESS_TOKEN", "A1");
        std::env::set_var("MSF_REFRESH_TOKEN", "R1");
    }

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for (key, value) in [("TEST_MSF_BOOL_1", "1"), ("TEST_MSF_BOOL_ON", "ON")] {
            std::env::set_var(key, value);
            assert!(env_bool(key, false));
        }
        for (key, value) in [("TEST_MSF_BOOL_0", "0"), ("TEST_MSF_BOOL_NO", "no")] {
            std::env::set_var(key, value);
            assert!(!env_bool(key, true));
        }

        std::env::remove_var("TEST_MSF_BOOL_MISSING");
        assert!(env_bool("TEST_MSF_BOOL_MISSING", true));

        for key in ["TEST_MSF_BOOL_1", "TEST_MSF_BOOL_ON", "TEST_MSF_BOOL_0", "TEST_MSF_BOOL_NO"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_env_uses_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();

        let config = load_from_env().expect("config from env");

        assert_eq!(config.game_api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.game_api.api_key.expose(), "api-key");
        assert_eq!(config.identity.token_url, DEFAULT_TOKEN_URL);
        assert_eq!(config.identity.client_id, "client");
        assert_eq!(config.credentials.refresh_token.expose(), "R1");
        assert_eq!(config.fetch.retries, 3);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.refresh_failure, RefreshFailurePolicy::Continue);
        assert_eq!(config.cache.player_card_ttl_secs, 300);
        assert!(!config.fetch.disable_proxy);

        clear_env();
    }

    #[test]
    fn test_load_from_env_overrides() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("MSF_API_BASE_URL", "http://localhost:9000/player/v1");
        std::env::set_var("MSF_FETCH_RETRIES", "5");
        std::env::set_var("MSF_REQUEST_TIMEOUT_SECS", "10");
        std::env::set_var("MSF_ABORT_ON_REFRESH_FAILURE", "true");
        std::env::set_var("MSF_PLAYER_CARD_CACHE_TTL_SECS", "0");

        let config = load_from_env().expect("config from env");

        assert_eq!(config.game_api.base_url, "http://localhost:9000/player/v1");
        assert_eq!(config.fetch.retries, 5);
        assert_eq!(config.fetch.timeout_secs, 10);
        assert_eq!(config.fetch.refresh_failure, RefreshFailurePolicy::Abort);
        assert_eq!(config.cache.player_card_ttl_secs, 0);

        clear_env();
    }

    #[test]
    fn test_load_from_env_disable_proxy_reads_value() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();

        std::env::set_var("MSF_DISABLE_PROXY", "false");
        assert!(!load_from_env().expect("config from env").fetch.disable_proxy);

        std::env::set_var("MSF_DISABLE_PROXY", "true");
        assert!(load_from_env().expect("config from env").fetch.disable_proxy);

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_var() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::remove_var("MSF_REFRESH_TOKEN");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, MsfChatError::Config(ref msg) if msg.contains("MSF_REFRESH_TOKEN")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("MSF_FETCH_RETRIES", "three");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, MsfChatError::Config(ref msg) if msg.contains("MSF_FETCH_RETRIES")));

        clear_env();
    }

    #[test]
    fn test_load_from_env_rejects_empty_secret() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();
        std::env::set_var("MSF_API_KEY", "");

        assert!(matches!(load_from_env(), Err(MsfChatError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_from_file_toml() {
        let file = temp_config(
            ".toml",
            r#"
            [game_api]
            api_key = "file-key"

            [identity]
            client_id = "file-client"
            client_secret = "file-secret"

            [credentials]
            access_token = "A1"
            refresh_token = "R1"

            [fetch]
            retries = 2
            refresh_failure = "abort"
            disable_proxy = true

            [cache]
            player_card_ttl_secs = 60
            "#,
        );

        let config = load_from_file(Some(file.path().to_path_buf())).expect("toml config");

        assert_eq!(config.game_api.api_key.expose(), "file-key");
        assert_eq!(config.game_api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.fetch.retries, 2);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.fetch.refresh_failure, RefreshFailurePolicy::Abort);
        assert!(config.fetch.disable_proxy);
        assert_eq!(config.cache.player_card_ttl_secs, 60);
    }

    #[test]
    fn test_load_from_file_json() {
        let file = temp_config(
            ".json",
            r#"{
                "game_api": { "base_url": "http://localhost:8080/", "api_key": "k" },
                "identity": { "client_id": "c", "client_secret": "s" },
                "credentials": { "access_token": "A1", "refresh_token": "R1" }
            }"#,
        );

        let config = load_from_file(Some(file.path().to_path_buf())).expect("json config");

        assert_eq!(config.game_api.base_url, "http://localhost:8080/");
        assert_eq!(config.fetch.retries, 3);
        assert_eq!(config.cache.player_card_ttl_secs, 300);
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/msfchat.toml")));
        assert!(matches!(result, Err(MsfChatError::Config(ref msg)) if msg.contains("not found")));
    }

    #[test]
    fn test_load_from_file_invalid_format() {
        let file = temp_config(".toml", "[game_api\napi_key = ");
        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(MsfChatError::Config(ref msg)) if msg.contains("TOML")));
    }

    #[test]
    fn test_load_from_file_unsupported_extension() {
        let file = temp_config(".yaml", "game_api: {}");
        let result = load_from_file(Some(file.path().to_path_buf()));
        assert!(
            matches!(result, Err(MsfChatError::Config(ref msg)) if msg.contains("Unsupported"))
        );
    }

    #[test]
    fn test_load_with_path_prefers_explicit_file() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();
        set_required_env();

        let file = temp_config(
            ".json",
            r#"{
                "game_api": { "api_key": "from-file" },
                "identity": { "client_id": "c", "client_secret": "s" },
                "credentials": { "access_token": "A1", "refresh_token": "R1" }
            }"#,
        );

        let config = load_with_path(Some(file.path().to_path_buf())).expect("config");
        assert_eq!(config.game_api.api_key.expose(), "from-file");

        clear_env();
    }
}
