//! JWT 服务单元测试
//!
//! 测试令牌签发、验证与拒绝路径

use catalog_service::auth::jwt::{Claims, JwtService};
use catalog_service::config::{
    AppConfig, DatabaseConfig, LoggingConfig, SecurityConfig, ServerConfig,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::Secret;

const TEST_SECRET: &str = "test_secret_key_32_characters_long!";

/// 创建测试配置
fn create_test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            addr: "127.0.0.1:3000".to_string(),
        },
        database: DatabaseConfig {
            url: Secret::new("postgresql://localhost/test".to_string()),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            format: "json".to_string(),
        },
        security: SecurityConfig {
            jwt_secret: Secret::new(TEST_SECRET.to_string()),
            token_exp_secs: 3600,
            admin_username: "admin".to_string(),
            admin_password: Secret::new("password123".to_string()),
        },
    }
}

#[test]
fn test_jwt_service_creation() {
    let config = create_test_config();
    assert!(JwtService::from_config(&config).is_ok());
}

#[test]
fn test_issue_then_verify_returns_username() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    let token = service.issue("admin").unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.sub, "admin");
}

#[test]
fn test_expiry_is_one_hour_from_issuance() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    let token = service.issue("admin").unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_expired_token_rejected_despite_valid_signature() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    // 使用相同密钥手工编码一个已过期的令牌
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "admin".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert!(service.verify(&token).is_err());
}

#[test]
fn test_token_signed_with_different_key_rejected() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    let mut other_config = create_test_config();
    other_config.security.jwt_secret =
        Secret::new("another_secret_key_32_characters!!!".to_string());
    let other_service = JwtService::from_config(&other_config).unwrap();

    let token = other_service.issue("admin").unwrap();
    assert!(service.verify(&token).is_err());
}

#[test]
fn test_malformed_tokens_rejected() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    assert!(service.verify("").is_err());
    assert!(service.verify("not-a-jwt").is_err());
    assert!(service.verify("aaaa.bbbb.cccc").is_err());

    // 去掉签名段
    let token = service.issue("admin").unwrap();
    let unsigned: String = token.rsplitn(2, '.').nth(1).unwrap().to_string();
    assert!(service.verify(&unsigned).is_err());
}

#[test]
fn test_all_rejections_map_to_forbidden() {
    let service = JwtService::from_config(&create_test_config()).unwrap();

    // 无论拒绝原因如何，对调用方都是同一个 403 错误
    let err = service.verify("garbage").unwrap_err();
    assert_eq!(err.code(), 403);

    let mut other_config = create_test_config();
    other_config.security.jwt_secret =
        Secret::new("another_secret_key_32_characters!!!".to_string());
    let other_service = JwtService::from_config(&other_config).unwrap();
    let token = other_service.issue("admin").unwrap();

    let err = service.verify(&token).unwrap_err();
    assert_eq!(err.code(), 403);
}
