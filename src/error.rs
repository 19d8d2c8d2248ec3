//! 统一错误模型
//! 定义所有错误类型和错误响应格式

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid username or password")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 获取 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 获取响应中使用的错误消息
    /// 存储错误按原样透传，其余返回固定的用户可读消息
    pub fn user_message(&self) -> String {
        match self {
            AppError::Unauthorized => "Invalid username or password".to_string(),
            AppError::Forbidden => "Access denied".to_string(),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(e) => e.to_string(),
            AppError::Config(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// 获取错误码
    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    // 便捷方法
    pub fn not_found(msg: &str) -> Self {
        AppError::NotFound(msg.to_string())
    }

    pub fn validation(msg: &str) -> Self {
        AppError::Validation(msg.to_string())
    }

    pub fn internal_error(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 记录错误日志
        tracing::error!(
            code = self.code(),
            message = %self,
            "Application error"
        );

        // 5xx 使用 {"error": ...}（底层错误文本透传），4xx 使用 {"message": ...}
        let body = if status.is_server_error() {
            json!({ "error": self.user_message() })
        } else {
            json!({ "message": self.user_message() })
        };

        (status, Json(body)).into_response()
    }
}

/// 从 config::ConfigError 转换
impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Unauthorized.code(), 401);
        assert_eq!(AppError::Forbidden.code(), 403);
        assert_eq!(AppError::NotFound("Product not found".to_string()).code(), 404);
        assert_eq!(AppError::Validation("All fields are required".to_string()).code(), 400);
        assert_eq!(AppError::Internal("boom".to_string()).code(), 500);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(AppError::Unauthorized.user_message(), "Invalid username or password");
        assert_eq!(AppError::Forbidden.user_message(), "Access denied");
        assert_eq!(
            AppError::not_found("Product not found").user_message(),
            "Product not found"
        );
        assert_eq!(
            AppError::validation("All fields are required").user_message(),
            "All fields are required"
        );
    }

    #[test]
    fn test_store_error_text_passed_through() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        let message = error.user_message();
        assert!(!message.is_empty());
        assert_eq!(message, sqlx::Error::RowNotFound.to_string());
    }
}
