use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// The default `*` mirrors the public suggestion endpoint's permissive
    /// CORS policy.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Object store configuration (root directory, signing secret).
    pub storage: StorageConfig,
}

/// Private object store configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for stored objects.
    pub root: String,
    /// HMAC secret for signed URLs.
    pub signing_secret: String,
    /// Base URL prefixed to signed paths (default: `http://localhost:3000`).
    pub public_base_url: String,
    /// Default signed-URL lifetime in seconds (default: `3600`).
    pub default_url_expiry_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `3000`                   |
    /// | `CORS_ORIGINS`           | `*`                      |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `STORAGE_ROOT`           | `./data/wardrobe`        |
    /// | `STORAGE_SIGNING_SECRET` | **required**             |
    /// | `PUBLIC_BASE_URL`        | `http://localhost:3000`  |
    /// | `SIGNED_URL_EXPIRY_SECS` | `3600`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let storage = StorageConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            storage,
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `STORAGE_SIGNING_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let root = std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "./data/wardrobe".into());

        let signing_secret = std::env::var("STORAGE_SIGNING_SECRET")
            .expect("STORAGE_SIGNING_SECRET must be set in the environment");
        assert!(
            !signing_secret.is_empty(),
            "STORAGE_SIGNING_SECRET must not be empty"
        );

        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        let default_url_expiry_secs: u64 = std::env::var("SIGNED_URL_EXPIRY_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("SIGNED_URL_EXPIRY_SECS must be a valid u64");

        Self {
            root,
            signing_secret,
            public_base_url,
            default_url_expiry_secs,
        }
    }
}
