use super::reconciler::{parse_store_id, ReconcileService};
use crate::error::AppError;
use crate::models::{OrderRecord, OrderStatus, PaidOrdersResponse, PaidOrdersSummary};
use crate::reconcile::decimal_to_number;

impl ReconcileService {
    /// 已付款但尚未打印发票的订单
    pub async fn list_paid_not_printed(
        &self,
        store_id: Option<&str>,
    ) -> Result<PaidOrdersResponse, AppError> {
        let store_id = parse_store_id(store_id)?;
        let orders = self.orders.list_by_status(store_id, OrderStatus::Paid).await?;

        let summary = PaidOrdersSummary {
            total_orders: orders.len(),
            total_amount: orders.iter().map(|o| decimal_to_number(&o.total)).sum(),
        };
        tracing::info!(
            "Store {}: {} paid orders waiting for print, total {}",
            store_id,
            summary.total_orders,
            summary.total_amount
        );

        Ok(PaidOrdersResponse {
            message: format!("Found {} paid orders not yet printed", summary.total_orders),
            summary,
            orders,
        })
    }

    /// 导出待打印订单为 CSV, 供收银台打印
    pub async fn export_paid_not_printed_csv(
        &self,
        store_id: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        let response = self.list_paid_not_printed(store_id).await?;
        orders_to_csv(&response.orders)
    }
}

fn orders_to_csv(orders: &[OrderRecord]) -> Result<Vec<u8>, AppError> {
    let to_internal = |e: csv::Error| AppError::Internal(format!("CSV export failed: {}", e));

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "order_id",
            "created_at",
            "customer",
            "phone",
            "employee",
            "payment_method",
            "total",
        ])
        .map_err(to_internal)?;

    for order in orders {
        writer
            .write_record([
                order.id.to_string(),
                order.created_at.to_rfc3339(),
                order.customer_name().to_string(),
                order.customer_phone().to_string(),
                order.employee.as_ref().map(|e| e.name.clone()).unwrap_or_default(),
                order.payment_method.as_str().to_string(),
                order.total.to_string(),
            ])
            .map_err(to_internal)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV export failed: {}", e)))
}
