use hocon::HoconLoader;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

const MASKED: &str = "***MASKED***";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub swagger: SwaggerProperties,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// The `swagger.*` settings tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwaggerProperties {
    pub enabled: bool,
    pub security: SecurityProperties,
    pub ui: UiProperties,
    /// Free-form entries, served as-is.
    pub metadata: HashMap<String, Value>,
}

impl Default for SwaggerProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            security: SecurityProperties::default(),
            ui: UiProperties::default(),
            metadata: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityProperties {
    pub oauth2: OAuthProperties,
    pub sso: SsoProperties,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiProperties {
    pub enabled: bool,
    /// Path that forwards to `view`.
    pub endpoint: String,
    pub view: String,
    /// Overrides the server URL published in the document.
    pub host: String,
}

impl Default for UiProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "/swagger".to_string(),
            view: "/swagger-ui/".to_string(),
            host: String::new(),
        }
    }
}

/// Client settings for the UI's single sign-on flow.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SsoProperties {
    pub enabled: bool,
    #[serde(alias = "baseUrl")]
    pub base_url: String,
    #[serde(alias = "tokenPath")]
    pub token_path: String,
    #[serde(alias = "authorizePath")]
    pub authorize_path: String,
    #[serde(alias = "clientId")]
    pub client_id: String,
    #[serde(alias = "clientSecret")]
    pub client_secret: String,
}

impl Default for SsoProperties {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: String::new(),
            token_path: String::new(),
            authorize_path: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
        }
    }
}

impl SsoProperties {
    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, self.token_path)
    }

    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.base_url, self.authorize_path)
    }
}

/// OAuth2 authorization-code settings published as the document's security scheme.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OAuthProperties {
    pub enabled: bool,
    #[serde(alias = "baseUrl")]
    pub base_url: String,
    #[serde(alias = "tokenPath")]
    pub token_path: String,
    #[serde(alias = "authorizePath")]
    pub authorize_path: String,
    #[serde(alias = "clientId")]
    pub client_id: String,
    #[serde(alias = "clientSecret")]
    pub client_secret: String,
}

impl OAuthProperties {
    pub fn token_url(&self) -> String {
        format!("{}{}", self.base_url, self.token_path)
    }

    pub fn authorize_url(&self) -> String {
        format!("{}{}", self.base_url, self.authorize_path)
    }
}

impl Config {
    /// Load from `application.conf`, or from the environment when the file is absent.
    pub fn load() -> Result<Self, String> {
        Self::load_from("application.conf")
    }

    /// Load from `path`, or from the environment when it does not exist.
    ///
    /// A file that exists but cannot be parsed or bound is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_hocon_path(path);
        }

        tracing::warn!(
            "Configuration file {} not found. Falling back to environment variables.",
            path.display()
        );
        Self::from_env().map_err(|e| format!("Failed to load config from environment: {}", e))
    }

    /// Load configuration from HOCON file with environment variable substitution
    pub fn from_hocon() -> Result<Self, String> {
        Self::from_hocon_path("application.conf")
    }

    /// Load configuration from a specific HOCON file path
    pub fn from_hocon_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(format!("Configuration file not found: {}", path.display()));
        }

        let mut config: Config = HoconLoader::new()
            .load_file(path)
            .map_err(|e| format!("Failed to load HOCON file: {}", e))?
            .resolve()
            .map_err(|e| format!("Failed to parse and resolve HOCON: {}", e))?;

        // Client secrets from the environment override the file.
        config.load_secrets_from_env();

        Ok(config)
    }

    /// Load from `DOCKET_`-prefixed environment variables, `__` separating nested keys
    /// (e.g. `DOCKET_SWAGGER__SECURITY__SSO__CLIENT_ID`).
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DOCKET")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn load_secrets_from_env(&mut self) {
        if let Ok(secret) = std::env::var("DOCKET_SSO_CLIENT_SECRET") {
            self.swagger.security.sso.client_secret = secret;
        }
        if let Ok(secret) = std::env::var("DOCKET_OAUTH2_CLIENT_SECRET") {
            self.swagger.security.oauth2.client_secret = secret;
        }
    }

    /// Reject settings the service cannot start with.
    pub fn validate(&self) -> Result<(), String> {
        let oauth2 = &self.swagger.security.oauth2;
        if self.swagger.enabled && oauth2.enabled {
            for (name, value) in [
                ("base_url", &oauth2.base_url),
                ("token_path", &oauth2.token_path),
                ("authorize_path", &oauth2.authorize_path),
            ] {
                if value.trim().is_empty() {
                    return Err(format!(
                        "swagger.security.oauth2.{} must be set when OAuth2 is enabled",
                        name
                    ));
                }
            }
        }

        let ui = &self.swagger.ui;
        if self.swagger.enabled && ui.enabled && ui.view.trim_end_matches('/').is_empty() {
            return Err(format!(
                "swagger.ui.view must name a path below '/' when the UI is enabled (got {:?})",
                ui.view
            ));
        }
        for (name, value) in [("endpoint", &ui.endpoint), ("view", &ui.view)] {
            if !value.is_empty() && !value.starts_with('/') {
                return Err(format!(
                    "swagger.ui.{} must start with '/' (got {:?})",
                    name, value
                ));
            }
        }

        Ok(())
    }

    /// Produce a version safe to log (secrets masked).
    pub fn sanitized(&self) -> Self {
        let mut clone = self.clone();
        let security = &mut clone.swagger.security;
        if !security.oauth2.client_secret.is_empty() {
            security.oauth2.client_secret = MASKED.to_string();
        }
        if !security.sso.client_secret.is_empty() {
            security.sso.client_secret = MASKED.to_string();
        }
        clone
    }
}
