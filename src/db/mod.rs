pub mod pool;
pub mod queries;
pub mod repository;

pub use pool::create_pool;
pub use repository::{ActivityLog, OrderRepository, PgActivityLog, PgOrderRepository};
