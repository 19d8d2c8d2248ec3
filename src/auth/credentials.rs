//! Credential store: the single administrative account
//! Built once at startup, immutable afterwards

use crate::{auth::password::PasswordHasher, config::AppConfig, error::AppError};
use secrecy::ExposeSecret;

/// The one process-wide credential. The plaintext password from config is
/// hashed at construction and never kept around.
#[derive(Debug, Clone)]
pub struct AdminCredential {
    pub username: String,
    pub password_hash: String,
}

impl AdminCredential {
    /// Build the credential from config, hashing the configured password
    pub fn from_config(config: &AppConfig, hasher: &PasswordHasher) -> Result<Self, AppError> {
        let password_hash = hasher.hash(config.security.admin_password.expose_secret())?;

        Ok(Self {
            username: config.security.admin_username.clone(),
            password_hash,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    fn test_config() -> AppConfig {
        AppConfig {
            server: crate::config::ServerConfig {
                addr: "127.0.0.1:3000".to_string(),
            },
            database: crate::config::DatabaseConfig {
                url: Secret::new("postgresql://localhost/test".to_string()),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            logging: crate::config::LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            security: crate::config::SecurityConfig {
                jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
                token_exp_secs: 3600,
                admin_username: "admin".to_string(),
                admin_password: Secret::new("password123".to_string()),
            },
        }
    }

    #[test]
    fn test_credential_holds_hash_not_plaintext() {
        let hasher = PasswordHasher::new();
        let credential = AdminCredential::from_config(&test_config(), &hasher).unwrap();

        assert_eq!(credential.username, "admin");
        assert_ne!(credential.password_hash, "password123");
        hasher.verify("password123", &credential.password_hash).unwrap();
    }
}
