use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// 无客户记录时的默认客户名 (散客)
pub const WALK_IN_CUSTOMER: &str = "Khách lẻ";

/// 付款方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

impl PaymentMethod {
    /// 发票上对应的显示关键字 (小写)
    pub fn display_token(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "tiền mặt",
            PaymentMethod::Transfer => "qr",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Transfer => "transfer",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            // 旧数据里转账曾记为 qr / bank_transfer
            "transfer" | "qr" | "bank_transfer" => Ok(PaymentMethod::Transfer),
            other => Err(format!("unknown payment method '{}'", other)),
        }
    }
}

/// 订单状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Paid,
    Printed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Printed => "printed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "printed" => Ok(OrderStatus::Printed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    pub id: Uuid,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub id: Uuid,
    pub name: String,
}

/// 订单记录 (只读, 来自订单仓储)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: Uuid,
    pub store_id: Uuid,
    pub total: BigDecimal,
    pub payment_method: PaymentMethod,
    pub vat_invoice: bool,
    pub customer: Option<CustomerRef>,
    pub employee: Option<EmployeeRef>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderRecord {
    /// 客户名, 无客户时为散客
    pub fn customer_name(&self) -> &str {
        self.customer
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(WALK_IN_CUSTOMER)
    }

    /// 客户电话, 可能为空
    pub fn customer_phone(&self) -> &str {
        self.customer
            .as_ref()
            .and_then(|c| c.phone.as_deref())
            .map(str::trim)
            .unwrap_or("")
    }
}

/// orders 联表 customers / employees 的查询行
#[derive(Debug, Clone, FromRow)]
pub struct OrderRow {
    pub id: Uuid,
    pub store_id: Uuid,
    pub total: BigDecimal,
    pub payment_method: String,
    pub vat_invoice: bool,
    pub status: String,
    pub customer_id: Option<Uuid>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub employee_id: Option<Uuid>,
    pub employee_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for OrderRecord {
    type Error = String;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let customer = match (row.customer_id, row.customer_name) {
            (Some(id), Some(name)) => Some(CustomerRef {
                id,
                name,
                phone: row.customer_phone,
            }),
            _ => None,
        };
        let employee = match (row.employee_id, row.employee_name) {
            (Some(id), Some(name)) => Some(EmployeeRef { id, name }),
            _ => None,
        };

        Ok(Self {
            id: row.id,
            store_id: row.store_id,
            total: row.total,
            payment_method: row.payment_method.parse()?,
            vat_invoice: row.vat_invoice,
            customer,
            employee,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> OrderRow {
        OrderRow {
            id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            total: BigDecimal::from(150000),
            payment_method: "qr".to_string(),
            vat_invoice: false,
            status: "paid".to_string(),
            customer_id: None,
            customer_name: None,
            customer_phone: None,
            employee_id: Some(Uuid::new_v4()),
            employee_name: Some("Lan".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_without_customer_falls_back_to_walk_in() {
        let order = OrderRecord::try_from(row()).unwrap();
        assert_eq!(order.payment_method, PaymentMethod::Transfer);
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.customer_name(), WALK_IN_CUSTOMER);
        assert_eq!(order.customer_phone(), "");
        assert_eq!(order.employee.unwrap().name, "Lan");
    }

    #[test]
    fn unknown_stored_values_are_rejected() {
        let mut bad = row();
        bad.status = "archived".to_string();
        assert!(OrderRecord::try_from(bad).is_err());
    }
}
