//! File configuration.
//!
//! Configuration is a TOML document, by default at
//! `<user config dir>/prosper-api/config.toml`:
//!
//! ```toml
//! [credentials]
//! client-id = "0123456789abcdef0123456789abcdef"
//! client-secret = "fedcba0987654321fedcba0987654321"
//! username = "user@example.com"
//! password = "..."
//!
//! [auth]
//! token-cache = "/path/to/token-cache"
//!
//! [serde]
//! use-decimals = true
//! parse-dates = true
//! parse-enums = true
//! ```
//!
//! `client-secret` and `password` may be left out and resolved from the
//! platform credential store instead. Sections other than these are
//! allowed and available through [`Config::get`].

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use toml::{Table, Value};

use crate::decode::DecodeConfig;
use crate::{Error, Result};

/// Dotted key of the OAuth client id.
pub const CLIENT_ID: &str = "credentials.client-id";
/// Dotted key of the OAuth client secret.
pub const CLIENT_SECRET: &str = "credentials.client-secret";
/// Dotted key of the account username.
pub const USERNAME: &str = "credentials.username";
/// Dotted key of the account password.
pub const PASSWORD: &str = "credentials.password";
/// Dotted key of the token cache path.
pub const TOKEN_CACHE: &str = "auth.token-cache";

const APP_DIR: &str = "prosper-api";

const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PROSPER_API_CLIENT_ID", CLIENT_ID),
    ("PROSPER_API_CLIENT_SECRET", CLIENT_SECRET),
    ("PROSPER_API_USERNAME", USERNAME),
    ("PROSPER_API_PASSWORD", PASSWORD),
    ("PROSPER_API_TOKEN_CACHE", TOKEN_CACHE),
];

/// Validated configuration values.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    document: Table,
}

impl Config {
    /// Parse and validate a TOML document.
    ///
    /// # Example
    ///
    /// ```
    /// use prosper_rs::Config;
    ///
    /// let config = Config::from_toml_str(r#"
    ///     [credentials]
    ///     client-id = "0123456789abcdef0123456789abcdef"
    ///     username = "user@example.com"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.username(), "user@example.com");
    /// assert!(config.decode_config().use_decimals);
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let document: Table = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Invalid TOML format: {}", e)))?;
        Self::from_table(document)
    }

    /// Load and validate the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Config(format!(
                "The config file was not found at '{}'",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), "Loading configuration from file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load and validate the file at the default location.
    pub fn load() -> Result<Self> {
        let path = default_config_path().ok_or_else(|| {
            Error::Config("Cannot determine the user config directory".to_string())
        })?;
        Self::from_path(path)
    }

    /// Validate an already-parsed document.
    pub fn from_table(mut document: Table) -> Result<Self> {
        validate(&mut document)?;
        Ok(Self { document })
    }

    /// Wrap a document without validating it.
    ///
    /// Typed accessors fall back to empty values for missing credentials;
    /// intended for tooling that only reads arbitrary keys.
    pub fn unvalidated(document: Table) -> Self {
        Self { document }
    }

    /// Apply `PROSPER_API_*` environment variables over the file values,
    /// then re-validate.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        for (variable, key) in ENV_OVERRIDES {
            if let Some(value) = lookup(variable) {
                tracing::debug!(variable, key, "Config value overridden from environment");
                set(&mut self.document, key, Value::String(value));
            }
        }
        Self::from_table(self.document)
    }

    /// Look up a value by its `.`-separated path.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.document.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    /// Look up a value rendered as a string.
    pub fn get_str(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Table(_) | Value::Array(_) => None,
            other => Some(other.to_string()),
        }
    }

    /// Look up a value interpreted as a boolean.
    ///
    /// `true`, the strings `true`, `t`, `yes` and `y` (any case), and
    /// non-zero numbers are true. Any other present value is false.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(Value::Boolean(b)) => *b,
            Some(Value::String(s)) => {
                matches!(s.to_ascii_lowercase().as_str(), "true" | "t" | "yes" | "y")
            }
            Some(Value::Integer(i)) => *i != 0,
            Some(Value::Float(f)) => *f != 0.0,
            Some(_) => false,
        }
    }

    /// Look up a value interpreted as a decimal.
    pub fn get_decimal(&self, key: &str) -> Result<Option<Decimal>> {
        let value = match self.get(key) {
            None => return Ok(None),
            Some(value) => value,
        };
        let parsed = match value {
            Value::Integer(i) => Some(Decimal::from(*i)),
            Value::Float(f) => Decimal::from_str(&f.to_string()).ok(),
            Value::String(s) => Decimal::from_str(s.trim()).ok(),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| Error::Config(format!("'{}' is not a decimal: {}", key, value)))
    }

    /// The OAuth client id.
    pub fn client_id(&self) -> &str {
        self.str_or_empty(CLIENT_ID)
    }

    /// The OAuth client secret, if configured.
    pub fn client_secret(&self) -> Option<&str> {
        self.get(CLIENT_SECRET).and_then(Value::as_str)
    }

    /// The account username.
    pub fn username(&self) -> &str {
        self.str_or_empty(USERNAME)
    }

    /// The account password, if configured.
    pub fn password(&self) -> Option<&str> {
        self.get(PASSWORD).and_then(Value::as_str)
    }

    /// Where the auth token is cached.
    pub fn token_cache_path(&self) -> PathBuf {
        self.get(TOKEN_CACHE)
            .and_then(Value::as_str)
            .map(PathBuf::from)
            .unwrap_or_else(default_token_cache_path)
    }

    /// The deserializer toggles from the `[serde]` section.
    ///
    /// `parse-decimals` is accepted as an alias of `use-decimals`.
    pub fn decode_config(&self) -> DecodeConfig {
        let use_decimals = if self.get("serde.use-decimals").is_some() {
            self.get_bool("serde.use-decimals", true)
        } else {
            self.get_bool("serde.parse-decimals", true)
        };

        DecodeConfig {
            use_decimals,
            parse_dates: self.get_bool("serde.parse-dates", true),
            parse_enums: self.get_bool("serde.parse-enums", true),
        }
    }

    fn str_or_empty(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

/// `<user config dir>/prosper-api/config.toml`, where the user config dir
/// is `$XDG_CONFIG_HOME` or `$HOME/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    user_dir("XDG_CONFIG_HOME", ".config").map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// `<user cache dir>/prosper-api/token-cache`, where the user cache dir is
/// `$XDG_CACHE_HOME` or `$HOME/.cache`, falling back to a relative `.cache`.
pub fn default_token_cache_path() -> PathBuf {
    user_dir("XDG_CACHE_HOME", ".cache")
        .unwrap_or_else(|| PathBuf::from(".cache"))
        .join(APP_DIR)
        .join("token-cache")
}

fn user_dir(xdg_var: &str, home_relative: &str) -> Option<PathBuf> {
    let non_empty = |name: &str| std::env::var_os(name).filter(|v| !v.is_empty());
    non_empty(xdg_var)
        .map(PathBuf::from)
        .or_else(|| non_empty("HOME").map(|home| PathBuf::from(home).join(home_relative)))
}

fn set(document: &mut Table, key: &str, value: Value) {
    let mut parts: Vec<&str> = key.split('.').collect();
    let Some(leaf) = parts.pop() else {
        return;
    };
    let mut table = document;
    for part in parts {
        let entry = table
            .entry(part.to_string())
            .or_insert_with(|| Value::Table(Table::new()));
        if !entry.is_table() {
            *entry = Value::Table(Table::new());
        }
        let Value::Table(inner) = entry else {
            return;
        };
        table = inner;
    }
    table.insert(leaf.to_string(), value);
}

fn validate(document: &mut Table) -> Result<()> {
    for (name, section) in document.iter() {
        if !section.is_table() {
            return Err(Error::Config(format!("'{}' must be a section", name)));
        }
    }

    let credentials = document
        .get("credentials")
        .and_then(Value::as_table)
        .ok_or_else(|| Error::Config("Missing [credentials] section".to_string()))?;

    match credentials.get("client-id").map(Value::as_str) {
        Some(Some(id)) if is_client_key(id) => {}
        Some(_) => return Err(invalid(CLIENT_ID, "32 lowercase hex characters")),
        None => return Err(Error::Config(format!("Missing '{}'", CLIENT_ID))),
    }
    match credentials.get("client-secret").map(Value::as_str) {
        None => {}
        Some(Some(secret)) if is_client_key(secret) => {}
        Some(_) => return Err(invalid(CLIENT_SECRET, "32 lowercase hex characters")),
    }
    match credentials.get("username").map(Value::as_str) {
        Some(Some(username)) if !username.is_empty() => {}
        Some(_) => return Err(invalid(USERNAME, "a non-empty string")),
        None => return Err(Error::Config(format!("Missing '{}'", USERNAME))),
    }
    if let Some(password) = credentials.get("password") {
        if !password.is_str() {
            return Err(invalid(PASSWORD, "a string"));
        }
    }

    let token_cache = document.get("auth").and_then(|auth| auth.get("token-cache"));
    match token_cache {
        Some(cache) if !cache.is_str() => return Err(invalid(TOKEN_CACHE, "a path string")),
        Some(_) => {}
        None => set(document, TOKEN_CACHE, default_cache_value()),
    }

    Ok(())
}

fn default_cache_value() -> Value {
    Value::String(default_token_cache_path().to_string_lossy().into_owned())
}

fn invalid(key: &str, expected: &str) -> Error {
    Error::Config(format!("'{}' must be {}", key, expected))
}

fn is_client_key(value: &str) -> bool {
    value.len() == 32 && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        [credentials]
        client-id = "0123456789abcdef0123456789abcdef"
        client-secret = "fedcba0987654321fedcba0987654321"
        username = "test@test.test"
        password = "password_value"

        [auth]
        token-cache = "/token/cache/path"
    "#;

    const MINIMAL: &str = r#"
        [credentials]
        client-id = "0123456789abcdef0123456789abcdef"
        username = "test@test.test"
    "#;

    #[test]
    fn test_valid_config_no_defaults() {
        let config = Config::from_toml_str(VALID).unwrap();
        assert_eq!(config.client_id(), "0123456789abcdef0123456789abcdef");
        assert_eq!(config.client_secret(), Some("fedcba0987654321fedcba0987654321"));
        assert_eq!(config.username(), "test@test.test");
        assert_eq!(config.password(), Some("password_value"));
        assert_eq!(config.token_cache_path(), PathBuf::from("/token/cache/path"));
    }

    #[test]
    fn test_valid_config_with_defaults() {
        let config = Config::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.client_secret(), None);
        assert_eq!(config.password(), None);
        assert!(config
            .get_str(TOKEN_CACHE)
            .unwrap()
            .ends_with("prosper-api/token-cache"));
        assert_eq!(config.decode_config(), DecodeConfig::default());
    }

    #[test]
    fn test_invalid_client_id() {
        let err = Config::from_toml_str(
            r#"
            [credentials]
            client-id = "NOT-HEX"
            username = "test@test.test"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("client-id")));
    }

    #[test]
    fn test_missing_credentials_section() {
        let err = Config::from_toml_str("[auth]\ntoken-cache = \"/x\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_extra_sections_allowed() {
        let config = Config::from_toml_str(&format!(
            "{}\n[testSection]\ntestString = \"stringValue\"\ntestNumber = 123",
            MINIMAL
        ))
        .unwrap();
        assert_eq!(config.get_str("testSection.testString").as_deref(), Some("stringValue"));
        assert_eq!(config.get("testSection.testNumber"), Some(&Value::Integer(123)));
        assert_eq!(config.get("testSection.invalidKey"), None);
        assert_eq!(config.get("invalidSection.testString"), None);
    }

    #[test]
    fn test_get_bool_truthiness() {
        let config = Config::unvalidated(
            toml::from_str(
                r#"
                [flags]
                yes = "Y"
                t = "t"
                no = "nope"
                one = 1
                zero = 0
                real = true
                "#,
            )
            .unwrap(),
        );
        assert!(config.get_bool("flags.yes", false));
        assert!(config.get_bool("flags.t", false));
        assert!(!config.get_bool("flags.no", true));
        assert!(config.get_bool("flags.one", false));
        assert!(!config.get_bool("flags.zero", true));
        assert!(config.get_bool("flags.real", false));
        assert!(config.get_bool("flags.missing", true));
    }

    #[test]
    fn test_get_decimal() {
        let config = Config::unvalidated(
            toml::from_str("[limits]\nmin = \"25.50\"\nmax = 100\nbad = \"x\"").unwrap(),
        );
        assert_eq!(config.get_decimal("limits.min").unwrap(), Some(Decimal::new(2550, 2)));
        assert_eq!(config.get_decimal("limits.max").unwrap(), Some(Decimal::from(100)));
        assert_eq!(config.get_decimal("limits.none").unwrap(), None);
        assert!(config.get_decimal("limits.bad").is_err());
    }

    #[test]
    fn test_decode_toggles_and_alias() {
        let config = Config::from_toml_str(&format!(
            "{}\n[serde]\nparse-decimals = false\nparse-enums = \"no\"",
            MINIMAL
        ))
        .unwrap();
        let decode = config.decode_config();
        assert!(!decode.use_decimals);
        assert!(decode.parse_dates);
        assert!(!decode.parse_enums);
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_toml_str(MINIMAL)
            .unwrap()
            .with_overrides(|name| match name {
                "PROSPER_API_PASSWORD" => Some("from-env".to_string()),
                "PROSPER_API_TOKEN_CACHE" => Some("/tmp/cache".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.password(), Some("from-env"));
        assert_eq!(config.token_cache_path(), PathBuf::from("/tmp/cache"));
    }

    #[test]
    fn test_invalid_env_override_fails_validation() {
        let result = Config::from_toml_str(MINIMAL).unwrap().with_overrides(|name| {
            (name == "PROSPER_API_CLIENT_SECRET").then(|| "short".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_path(dir.path().join("config.toml")).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, VALID).unwrap();
        assert_eq!(Config::from_path(&path).unwrap().username(), "test@test.test");
    }
}
