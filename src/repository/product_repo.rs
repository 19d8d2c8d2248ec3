//! Product repository (商品数据访问)

use crate::{
    error::AppError,
    models::product::{NewProduct, Product},
};
use sqlx::PgPool;

pub struct ProductRepository {
    db: PgPool,
}

impl ProductRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// 列出全部商品
    pub async fn list_all(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image_url FROM products ORDER BY id",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(products)
    }

    /// 按 id 查询商品
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price, image_url FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(product)
    }

    /// 创建商品（id 由数据库分配）
    pub async fn create(&self, fields: &NewProduct) -> Result<Product, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, description, price, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, price, image_url
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.image_url)
        .fetch_one(&self.db)
        .await?;

        Ok(product)
    }

    /// 更新商品，不存在时返回 None
    pub async fn update(&self, id: i64, fields: &NewProduct) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = $1, description = $2, price = $3, image_url = $4
            WHERE id = $5
            RETURNING id, name, description, price, image_url
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(fields.price)
        .bind(&fields.image_url)
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(product)
    }

    /// 删除商品，返回是否确有记录被删除
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
