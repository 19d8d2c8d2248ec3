//! 认证服务：登录与令牌签发

use crate::{
    auth::credentials::AdminCredential,
    auth::jwt::JwtService,
    auth::password::PasswordHasher,
    error::AppError,
    models::auth::{LoginRequest, LoginResponse},
};
use std::sync::Arc;

pub struct AuthService {
    credential: AdminCredential,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(credential: AdminCredential, jwt_service: Arc<JwtService>) -> Self {
        Self {
            credential,
            jwt_service,
        }
    }

    /// 用户登录
    /// 用户名错误与密码错误返回同一错误，避免泄露哪个字段不匹配
    pub fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        // 校验用户名（唯一账户，精确匹配）
        if req.username != self.credential.username {
            tracing::debug!("Login rejected: unknown username");
            return Err(AppError::Unauthorized);
        }

        // 校验密码（哈希比对，不做明文比较）
        let hasher = PasswordHasher::new();
        hasher
            .verify(&req.password, &self.credential.password_hash)
            .map_err(|_| {
                tracing::debug!("Login rejected: password mismatch");
                AppError::Unauthorized
            })?;

        // 签发令牌
        let token = self.jwt_service.issue(&self.credential.username)?;

        tracing::info!(username = %self.credential.username, "Login successful");

        Ok(LoginResponse { token })
    }
}
