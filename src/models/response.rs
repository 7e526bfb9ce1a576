use super::{FieldCheck, OrderRecord};
use serde::{Deserialize, Serialize};

/// 对账总体状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileStatus {
    Aligned,
    Diverged,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySummary {
    pub total_checks: usize,
    pub mismatched: usize,
    pub status: ReconcileStatus,
    pub text_preview: String,
}

/// 发票核对接口响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyInvoiceResponse {
    pub message: String,
    pub summary: VerifySummary,
    pub checks: Vec<FieldCheck>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidOrdersSummary {
    pub total_orders: usize,
    pub total_amount: f64,
}

/// 已付款未打印订单列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaidOrdersResponse {
    pub message: String,
    pub summary: PaidOrdersSummary,
    pub orders: Vec<OrderRecord>,
}
