use super::queries;
use crate::models::{ActivityEntry, OrderRecord, OrderRow, OrderStatus};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// 订单只读仓储
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_order(
        &self,
        order_id: Uuid,
        store_id: Uuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error>;

    /// 按 updated_at 倒序
    async fn list_by_status(
        &self,
        store_id: Uuid,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, sqlx::Error>;
}

/// 审计日志
#[async_trait]
pub trait ActivityLog: Send + Sync {
    async fn record(&self, entry: ActivityEntry) -> Result<(), sqlx::Error>;
}

fn to_record(row: OrderRow) -> Result<OrderRecord, sqlx::Error> {
    let order_id = row.id;
    OrderRecord::try_from(row).map_err(|e| {
        tracing::error!("Order {} has invalid stored data: {}", order_id, e);
        sqlx::Error::Decode(e.into())
    })
}

pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_order(
        &self,
        order_id: Uuid,
        store_id: Uuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        queries::get_order(&self.pool, order_id, store_id)
            .await?
            .map(to_record)
            .transpose()
    }

    async fn list_by_status(
        &self,
        store_id: Uuid,
        status: OrderStatus,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        queries::list_orders_by_status(&self.pool, store_id, status)
            .await?
            .into_iter()
            .map(to_record)
            .collect()
    }
}

pub struct PgActivityLog {
    pool: PgPool,
}

impl PgActivityLog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityLog for PgActivityLog {
    async fn record(&self, entry: ActivityEntry) -> Result<(), sqlx::Error> {
        queries::insert_activity(&self.pool, &entry).await
    }
}
