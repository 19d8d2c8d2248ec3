//! JWT 认证中间件
//! 请求级状态机：无令牌/令牌无效 -> 403，验证通过 -> 放行并附加身份

use crate::{auth::jwt::JwtService, error::AppError};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// 认证上下文（附加到请求扩展）
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
}

// 实现 FromRequestParts 以便在 handler 中直接提取 AuthContext
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AppError::Forbidden)
    }
}

/// 从 Authorization 头提取令牌
/// 头缺失或格式错误直接拒绝，不调用令牌服务
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| {
            if s.starts_with("Bearer ") {
                Some(s[7..].to_string())
            } else {
                None
            }
        })
        .ok_or(AppError::Forbidden)
}

/// JWT 认证中间件 - 变更类端点必须认证
pub async fn jwt_auth_middleware(
    State(jwt_service): State<Arc<JwtService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // 从 Authorization 头提取令牌
    let token = extract_token(req.headers())?;

    // 验证令牌
    let claims = jwt_service.verify(&token)?;

    // 创建认证上下文并附加到请求扩展
    let auth_context = AuthContext {
        username: claims.sub,
    };
    req.extensions_mut().insert(auth_context);

    Ok(next.run(req).await)
}
