use std::collections::HashMap;
use std::env;
use std::path::Path;

use url::Url;

use crate::dotenv::DotenvFile;
use crate::error::ConfigError;

const API_URL_VAR: &str = "API_URL";
const API_VERSION_VAR: &str = "API_VERSION";
const CMS_USER_VAR: &str = "CMS_USER";
const CMS_PASSWORD_VAR: &str = "CMS_PASSWORD";

/// Connection settings for the schema API, resolved once at startup and
/// passed into [`SchemaClient::new`](crate::SchemaClient::new).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the CMS API.
    pub base_url: Url,
    /// API version segment of the endpoint path.
    pub api_version: String,
    /// Account used for the authentication handshake.
    pub username: String,
    /// Password for `username`.
    pub password: String,
    /// Whether to verify TLS certificates on API calls.
    pub verify_tls: bool,
}

impl ClientConfig {
    /// Resolve the configuration from the process environment, falling back
    /// to a `.env` file in the current directory for unset variables.
    pub fn from_env(verify_tls: bool) -> Result<Self, ConfigError> {
        let process_env: HashMap<String, String> = env::vars().collect();
        let dotenv = DotenvFile::read(Path::new(".env")).map_err(ConfigError::Dotenv)?;
        Self::resolve(&process_env, dotenv.vars(), verify_tls)
    }

    /// Resolve from explicit sources; entries in `env` win over `fallback`.
    fn resolve(
        env: &HashMap<String, String>,
        fallback: &HashMap<String, String>,
        verify_tls: bool,
    ) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&lookup(API_URL_VAR, env, fallback)?)?;
        Ok(Self {
            base_url,
            api_version: lookup(API_VERSION_VAR, env, fallback)?,
            username: lookup(CMS_USER_VAR, env, fallback)?,
            password: lookup(CMS_PASSWORD_VAR, env, fallback)?,
            verify_tls,
        })
    }
}

fn lookup(
    name: &'static str,
    env: &HashMap<String, String>,
    fallback: &HashMap<String, String>,
) -> Result<String, ConfigError> {
    env.get(name)
        .or_else(|| fallback.get(name))
        .cloned()
        .ok_or(ConfigError::MissingVar(name))
}
