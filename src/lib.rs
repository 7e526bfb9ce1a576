pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod extraction;
pub mod models;
pub mod reconcile;
pub mod service;

pub use config::AppConfig;
pub use db::create_pool;
pub use error::AppError;
pub use extraction::TextExtractor;
pub use service::ReconcileService;
