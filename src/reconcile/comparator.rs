//! 字段核对规则
//!
//! 规则顺序固定, 每条规则总会产出一个 FieldCheck, 取不到值时记为不匹配。
//! 比对采用包含关系而非严格结构化解析, 因为发票版式不受本系统控制。

use super::amount::{decimal_to_number, sanitize_amount};
use super::document::ExtractedDocument;
use super::labels::{
    extract_label, CUSTOMER_LABELS, INVOICE_ID_LABELS, PAYMENT_LABELS, TOTAL_LABELS, VAT_LABELS,
};
use crate::models::{CheckValue, FieldCheck, FieldKey, OrderRecord, WALK_IN_CUSTOMER};
use bigdecimal::BigDecimal;

/// 订单号兜底匹配时使用的尾部长度
const ORDER_ID_TAIL: usize = 8;

const VAT_YES: &str = "Có VAT";
const VAT_NO: &str = "Không VAT";
const VAT_TOKENS: [&str; 4] = ["vat", "gtgt", "%", "có"];

/// 客户行拆分结果: "姓名 - 电话"
#[derive(Debug, Default, PartialEq)]
struct CustomerLine {
    name: Option<String>,
    phone: Option<String>,
}

/// 按固定顺序核对全部字段
pub fn compare_fields(order: &OrderRecord, doc: &ExtractedDocument) -> Vec<FieldCheck> {
    let customer = split_customer_line(extract_label(&doc.lines, CUSTOMER_LABELS).as_deref());

    FieldKey::ALL
        .iter()
        .map(|&field| match field {
            FieldKey::OrderId => check_order_id(order, doc),
            FieldKey::TotalAmount => check_total(order, doc),
            FieldKey::PaymentMethod => check_payment(order, doc),
            FieldKey::CustomerName => check_customer_name(order, &customer),
            FieldKey::CustomerPhone => check_customer_phone(order, &customer),
            FieldKey::Vat => check_vat(order, doc),
        })
        .collect()
}

fn check_order_id(order: &OrderRecord, doc: &ExtractedDocument) -> FieldCheck {
    let expected = order.id.to_string().to_lowercase();
    let tail = &expected[expected.len().saturating_sub(ORDER_ID_TAIL)..];

    let actual = extract_label(&doc.lines, INVOICE_ID_LABELS).or_else(|| {
        (doc.normalized.contains(&expected) || doc.normalized.contains(tail))
            .then(|| expected.clone())
    });
    let matched = actual
        .as_ref()
        .is_some_and(|value| value.to_lowercase().contains(&expected));

    FieldCheck::new(FieldKey::OrderId, expected.into(), actual.map(Into::into), matched)
}

fn check_total(order: &OrderRecord, doc: &ExtractedDocument) -> FieldCheck {
    let actual = sanitize_amount(extract_label(&doc.lines, TOTAL_LABELS).as_deref());
    let tolerance = BigDecimal::from(1);
    let matched = actual
        .as_ref()
        .is_some_and(|value| (value - &order.total).abs() < tolerance);

    FieldCheck::new(
        FieldKey::TotalAmount,
        CheckValue::Amount(decimal_to_number(&order.total)),
        actual.map(|value| CheckValue::Amount(decimal_to_number(&value))),
        matched,
    )
}

fn check_payment(order: &OrderRecord, doc: &ExtractedDocument) -> FieldCheck {
    let expected = order.payment_method.display_token();
    let actual = extract_label(&doc.lines, PAYMENT_LABELS).map(|value| value.to_lowercase());
    let matched = actual.as_ref().is_some_and(|value| value.contains(expected));

    FieldCheck::new(FieldKey::PaymentMethod, expected.into(), actual.map(Into::into), matched)
}

fn check_customer_name(order: &OrderRecord, customer: &CustomerLine) -> FieldCheck {
    let expected = order.customer_name();
    let matched = match &customer.name {
        Some(actual) => actual.to_lowercase().contains(&expected.to_lowercase()),
        None => expected == WALK_IN_CUSTOMER,
    };

    FieldCheck::new(
        FieldKey::CustomerName,
        expected.into(),
        customer.name.clone().map(Into::into),
        matched,
    )
}

fn check_customer_phone(order: &OrderRecord, customer: &CustomerLine) -> FieldCheck {
    let expected = order.customer_phone();
    let matched = expected.is_empty() || customer.phone.as_deref() == Some(expected);

    FieldCheck::new(
        FieldKey::CustomerPhone,
        expected.into(),
        customer.phone.clone().map(Into::into),
        matched,
    )
}

fn check_vat(order: &OrderRecord, doc: &ExtractedDocument) -> FieldCheck {
    let actual = extract_label(&doc.lines, VAT_LABELS).map(|value| value.to_lowercase());
    let (expected, matched) = if order.vat_invoice {
        let has_token = actual
            .as_ref()
            .is_some_and(|value| VAT_TOKENS.iter().any(|token| value.contains(token)));
        (VAT_YES, has_token)
    } else {
        (VAT_NO, actual.is_none())
    };

    FieldCheck::new(FieldKey::Vat, expected.into(), actual.map(Into::into), matched)
}

fn split_customer_line(line: Option<&str>) -> CustomerLine {
    let Some(line) = line else {
        return CustomerLine::default();
    };
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    match line.split_once('-') {
        Some((name, phone)) => CustomerLine {
            name: non_empty(name),
            phone: normalize_phone(phone),
        },
        None => CustomerLine {
            name: non_empty(line),
            phone: None,
        },
    }
}

/// 仅保留数字和开头的 '+'
fn normalize_phone(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let mut phone = String::with_capacity(raw.len());
    if raw.starts_with('+') {
        phone.push('+');
    }
    phone.extend(raw.chars().filter(char::is_ascii_digit));

    (phone.len() > usize::from(phone.starts_with('+'))).then_some(phone)
}
