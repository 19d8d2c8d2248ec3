//! 认证相关的 HTTP 处理器

use crate::{error::AppError, middleware::AppState, models::auth::LoginRequest};
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// 登录
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = state.auth_service.login(&req)?;

    Ok(Json(response))
}
