//! 商品管理的 HTTP 处理器

use crate::{
    auth::middleware::AuthContext,
    error::AppError,
    middleware::AppState,
    models::product::ProductPayload,
    repository::ProductRepository,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// 列出全部商品
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let products = repo.list_all().await?;

    Ok(Json(products))
}

/// 获取单个商品
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    Ok(Json(product))
}

/// 创建商品
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    // 字段校验先于存储调用
    let fields = payload.validate()?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(&fields).await?;

    tracing::info!(
        username = %auth_context.username,
        product_id = product.id,
        "Product created"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// 更新商品
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let fields = payload.validate()?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .update(id, &fields)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    tracing::info!(
        username = %auth_context.username,
        product_id = product.id,
        "Product updated"
    );

    Ok(Json(product))
}

/// 删除商品
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    auth_context: AuthContext,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ProductRepository::new(state.db.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(AppError::not_found("Product not found"));
    }

    tracing::info!(
        username = %auth_context.username,
        product_id = id,
        "Product deleted"
    );

    Ok(Json(json!({ "message": "Product deleted" })))
}
