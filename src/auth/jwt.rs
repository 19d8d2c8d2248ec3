//! JWT token issuance and verification
//! Single self-contained bearer token, no refresh or revocation

use crate::{config::AppConfig, error::AppError};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration
    pub exp: i64,
}

/// JWT service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_exp_secs: u64,
}

impl JwtService {
    /// Create JWT service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config("JWT secret too short (min 32 chars)".to_string()));
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        Ok(Self {
            encoding_key,
            decoding_key,
            token_exp_secs: config.security.token_exp_secs,
        })
    }

    /// Issue a signed token for the given username
    pub fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.token_exp_secs as i64);

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal(format!("Failed to encode token: {}", e))
        })
    }

    /// Verify signature and expiry, returning the claims.
    /// Fails closed: malformed, wrong-key and expired tokens are
    /// indistinguishable to the caller; the decode error is only logged.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // 过期判定不容忍时钟偏移
        validation.leeway = 0;

        Ok(decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e);
                AppError::Forbidden
            })?
            .claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::Secret;

    // Mock config for testing
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
    fn test_issue_and_verify_round_trip() {
        let service = JwtService::from_config(&test_config()).unwrap();

        let token = service.issue("admin").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_invalid_token_fails() {
        let service = JwtService::from_config(&test_config()).unwrap();
        assert!(service.verify("invalid_token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_wrong_key_fails() {
        let service = JwtService::from_config(&test_config()).unwrap();

        let mut other = test_config();
        other.security.jwt_secret =
            Secret::new("another_secret_key_32_characters!!!".to_string());
        let other_service = JwtService::from_config(&other).unwrap();

        let token = other_service.issue("admin").unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_fails() {
        let service = JwtService::from_config(&test_config()).unwrap();

        // Encode an already-expired token with the same key
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let secret = "test_secret_key_32_characters_long!";
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_secret_too_short_rejected() {
        let mut config = test_config();
        config.security.jwt_secret = Secret::new("short".to_string());
        assert!(JwtService::from_config(&config).is_err());
    }
}
