use crate::models::{ActivityEntry, OrderRow, OrderStatus};
use sqlx::PgPool;
use std::time::Duration;
use uuid::Uuid;

/// 审计日志写入超时
const ACTIVITY_INSERT_TIMEOUT: Duration = Duration::from_secs(5);

const ORDER_COLUMNS: &str = r#"
    SELECT o.id,
           o.store_id,
           o.total,
           o.payment_method,
           o.vat_invoice,
           o.status,
           c.id AS customer_id,
           c.name AS customer_name,
           c.phone AS customer_phone,
           e.id AS employee_id,
           e.name AS employee_name,
           o.created_at,
           o.updated_at
    FROM orders o
    LEFT JOIN customers c ON c.id = o.customer_id
    LEFT JOIN employees e ON e.id = o.employee_id
"#;

/// 查询门店下的单个订单 (含客户、员工)
pub async fn get_order(
    pool: &PgPool,
    order_id: Uuid,
    store_id: Uuid,
) -> Result<Option<OrderRow>, sqlx::Error> {
    let sql = format!("{} WHERE o.id = $1 AND o.store_id = $2", ORDER_COLUMNS);
    sqlx::query_as::<_, OrderRow>(&sql)
        .bind(order_id)
        .bind(store_id)
        .fetch_optional(pool)
        .await
}

/// 查询门店下指定状态的订单, 最近更新的在前
pub async fn list_orders_by_status(
    pool: &PgPool,
    store_id: Uuid,
    status: OrderStatus,
) -> Result<Vec<OrderRow>, sqlx::Error> {
    let sql = format!(
        "{} WHERE o.store_id = $1 AND o.status = $2 ORDER BY o.updated_at DESC",
        ORDER_COLUMNS
    );
    sqlx::query_as::<_, OrderRow>(&sql)
        .bind(store_id)
        .bind(status.as_str())
        .fetch_all(pool)
        .await
}

/// 写入一条审计日志
pub async fn insert_activity(pool: &PgPool, entry: &ActivityEntry) -> Result<(), sqlx::Error> {
    let insert = sqlx::query(
        r#"
        INSERT INTO activity_logs (
            actor_id, store_id, action, target_type, target_id, description, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        "#,
    )
    .bind(entry.actor_id)
    .bind(entry.store_id)
    .bind(entry.action.as_str())
    .bind(&entry.target_type)
    .bind(entry.target_id)
    .bind(&entry.description)
    .execute(pool);

    match tokio::time::timeout(ACTIVITY_INSERT_TIMEOUT, insert).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => {
            tracing::error!("✗ activity_logs INSERT timed out (>{:?})", ACTIVITY_INSERT_TIMEOUT);
            Err(sqlx::Error::PoolTimedOut)
        }
    }
}
