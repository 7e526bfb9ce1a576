//! 金额解析的性质测试

use bigdecimal::BigDecimal;
use invoice_reconcile::reconcile::{extract_label, sanitize_amount};
use proptest::prelude::*;
use std::str::FromStr;

/// 类似发票上的金额写法: 分组、小数、货币符号
fn amount_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just(""), Just("-")],
        "[0-9]{1,3}",
        prop::collection::vec(("[.,]", "[0-9]{1,3}"), 0..4),
        prop_oneof![Just(""), Just(" đ"), Just("đ"), Just(" VND"), Just("₫")],
    )
        .prop_map(|(sign, head, groups, currency)| {
            let mut s = format!("{}{}", sign, head);
            for (sep, digits) in groups {
                s.push_str(&sep);
                s.push_str(&digits);
            }
            s.push_str(currency);
            s
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn sanitize_is_idempotent_on_canonical_output(raw in amount_text()) {
        let first = sanitize_amount(Some(&raw));
        prop_assert!(first.is_some());
        let canonical = first.clone().unwrap().to_string();
        prop_assert_eq!(sanitize_amount(Some(&canonical)), first);
    }

    #[test]
    fn grouped_thousands_read_as_integer(millions in 1u32..999, thousands in 0u32..999) {
        let raw = format!("{}.{:03}.000 đ", millions, thousands);
        let expected = BigDecimal::from(millions as i64 * 1_000_000 + thousands as i64 * 1_000);
        prop_assert_eq!(sanitize_amount(Some(&raw)), Some(expected));
    }

    #[test]
    fn text_without_digits_is_none(raw in "[a-zA-Z đ₫$]{0,20}") {
        prop_assert_eq!(sanitize_amount(Some(&raw)), None);
    }
}

#[test]
fn documented_examples() {
    let dec = |s: &str| Some(BigDecimal::from_str(s).unwrap());
    assert_eq!(sanitize_amount(Some("12.500.000 đ")), dec("12500000"));
    assert_eq!(sanitize_amount(Some("1,234.56")), dec("1234.56"));
    assert_eq!(sanitize_amount(Some("1.234,56")), dec("1234.56"));
    assert_eq!(sanitize_amount(Some("12,5")), dec("12.5"));
    assert_eq!(sanitize_amount(Some("12.345")), dec("12345"));
    assert_eq!(sanitize_amount(Some("")), None);
    assert_eq!(sanitize_amount(Some("abc")), None);
}

#[test]
fn label_lookup_examples() {
    assert_eq!(
        extract_label(&["Foo: bar", "Total: 100"], &["Total"]),
        Some("100".to_string())
    );
    assert_eq!(extract_label(&["nothing here"], &["Total"]), None);
}
