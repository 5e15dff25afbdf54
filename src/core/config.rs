//! Application configuration.
//!
//! The server loads configuration using `Config::from_env()` after calling
//! `dotenvy::dotenv()`. The browser bundle has no process environment, so it
//! uses `Config::from_build_env()`, which reads the value baked in at compile time.

/// Path of the registration endpoint, relative to the backend base URL.
pub const REGISTER_PATH: &str = "/api/auth/register";

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Base URL of the authentication service.
    /// Example: https://giftlink.example.com
    ///
    /// An empty value means requests go to the page's own origin.
    pub backend_url: String,
}

impl Config {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var(BACKEND_URL_VAR).unwrap_or_default(),
        }
    }

    /// Configuration captured from `BACKEND_URL` when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL").unwrap_or_default().to_string(),
        }
    }

    /// Check if a backend base URL is configured
    pub fn has_backend_url(&self) -> bool {
        !self.backend_url.is_empty()
    }

    /// Full URL of the registration endpoint.
    ///
    /// The base URL is used as given; it is not parsed or normalized.
    pub fn register_url(&self) -> String {
        format!("{}{}", self.backend_url, REGISTER_PATH)
    }
}
