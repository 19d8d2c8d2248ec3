//! 领域模型模块

pub mod auth;
pub mod product;
