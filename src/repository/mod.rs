//! 数据访问层

pub mod product_repo;

pub use product_repo::ProductRepository;
