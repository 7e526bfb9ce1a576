use serde::{Deserialize, Serialize};

/// 对账字段, 声明顺序即检查顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    OrderId,
    TotalAmount,
    PaymentMethod,
    CustomerName,
    CustomerPhone,
    Vat,
}

impl FieldKey {
    pub const ALL: [FieldKey; 6] = [
        FieldKey::OrderId,
        FieldKey::TotalAmount,
        FieldKey::PaymentMethod,
        FieldKey::CustomerName,
        FieldKey::CustomerPhone,
        FieldKey::Vat,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKey::OrderId => "Mã đơn hàng",
            FieldKey::TotalAmount => "Tổng tiền",
            FieldKey::PaymentMethod => "Phương thức thanh toán",
            FieldKey::CustomerName => "Khách hàng",
            FieldKey::CustomerPhone => "Số điện thoại",
            FieldKey::Vat => "Hóa đơn VAT",
        }
    }
}

/// 期望值/实际值, 金额以数字输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckValue {
    Amount(f64),
    Text(String),
}

impl From<&str> for CheckValue {
    fn from(value: &str) -> Self {
        CheckValue::Text(value.to_string())
    }
}

impl From<String> for CheckValue {
    fn from(value: String) -> Self {
        CheckValue::Text(value)
    }
}

/// 单个字段的核对结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub field: FieldKey,
    pub label: String,
    pub expected: CheckValue,
    pub actual: Option<CheckValue>,
    #[serde(rename = "match")]
    pub matched: bool,
}

impl FieldCheck {
    pub fn new(field: FieldKey, expected: CheckValue, actual: Option<CheckValue>, matched: bool) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            expected,
            actual,
            matched,
        }
    }
}
