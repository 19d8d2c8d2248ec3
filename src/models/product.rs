//! Product domain models

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

/// Incoming product body for create/update.
/// All fields optional so presence checks happen in `validate`, not in serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
}

/// Validated product fields, ready for the repository
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
}

impl ProductPayload {
    /// Require all four fields present and non-empty.
    /// A price of exactly zero counts as missing.
    pub fn validate(self) -> Result<NewProduct, AppError> {
        let name = self.name.filter(|s| !s.is_empty());
        let description = self.description.filter(|s| !s.is_empty());
        let price = self.price.filter(|p| *p != 0.0);
        let image_url = self.image_url.filter(|s| !s.is_empty());

        match (name, description, price, image_url) {
            (Some(name), Some(description), Some(price), Some(image_url)) => Ok(NewProduct {
                name,
                description,
                price,
                image_url,
            }),
            _ => Err(AppError::validation("All fields are required")),
        }
    }
}
