use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use std::env;
use std::path::PathBuf;

/// Process-wide configuration, loaded once at startup from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign session and flash cookies (env: SECRET_KEY)
    pub secret_key: String,

    /// Admin login username (env: ADMIN_USERNAME)
    pub admin_username: String,

    /// Admin login password, compared in plaintext (env: ADMIN_PASSWORD)
    pub admin_password: String,

    /// Root directory of the per-category image tree (env: UPLOAD_ROOT)
    pub upload_root: PathBuf,

    /// Listen port on 127.0.0.1 (env: PORT)
    pub port: u16,

    /// Request body cap for uploads in bytes (env: MAX_UPLOAD_SIZE)
    pub max_upload_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            secret_key: "defaultsecret".to_string(),
            admin_username: "admin".to_string(),
            admin_password: "sewsecure123".to_string(),
            upload_root: PathBuf::from("static/uploads"),
            port: 3000,
            max_upload_size: 16 * 1024 * 1024, // 16 MB
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            secret_key: env::var("SECRET_KEY").unwrap_or(default.secret_key),

            admin_username: env::var("ADMIN_USERNAME").unwrap_or(default.admin_username),

            admin_password: env::var("ADMIN_PASSWORD").unwrap_or(default.admin_password),

            upload_root: env::var("UPLOAD_ROOT")
                .map(PathBuf::from)
                .unwrap_or(default.upload_root),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),
        }
    }

    /// Cookie-signing key derived from the configured secret.
    ///
    /// `Key::from` requires at least 64 bytes of material, so the secret is
    /// stretched through SHA-512 first. Same secret, same key, across
    /// restarts — sessions survive a process restart.
    pub fn session_key(&self) -> Key {
        let digest = Sha512::digest(self.secret_key.as_bytes());
        Key::from(digest.as_slice())
    }
}
