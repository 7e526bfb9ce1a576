//! 按标签前缀从发票文本行中取值
//!
//! 发票文本可能丢失声调, 所以每个标签同时给出带声调和不带声调的写法。
//! 较长的别名需要排在前面, 否则 "phương thức" 会先吃掉 "phương thức thanh toán"。
//! 单独的 "thanh toán" 在小票上通常是实付金额行, 不作为付款方式标签。

pub const INVOICE_ID_LABELS: &[&str] = &[
    "mã hóa đơn",
    "ma hoa don",
    "mã đơn hàng",
    "ma don hang",
    "mã đơn",
    "ma don",
    "số hóa đơn",
    "so hoa don",
    "invoice no",
    "invoice id",
];

pub const TOTAL_LABELS: &[&str] = &[
    "tổng thanh toán",
    "tong thanh toan",
    "tổng tiền",
    "tong tien",
    "tổng cộng",
    "tong cong",
    "total",
];

pub const PAYMENT_LABELS: &[&str] = &[
    "phương thức thanh toán",
    "phuong thuc thanh toan",
    "hình thức thanh toán",
    "hinh thuc thanh toan",
    "phương thức",
    "phuong thuc",
];

pub const CUSTOMER_LABELS: &[&str] = &["khách hàng", "khach hang", "customer"];

pub const VAT_LABELS: &[&str] = &["vat", "thuế gtgt", "thue gtgt", "thuế", "thue", "tax"];

/// 逐行扫描, 第一条以任一别名开头且值非空的行胜出
pub fn extract_label<S: AsRef<str>>(lines: &[S], aliases: &[&str]) -> Option<String> {
    for line in lines {
        let line = line.as_ref().trim();
        for alias in aliases {
            let Some(rest) = strip_prefix_ignore_case(line, alias) else {
                continue;
            };
            let rest = rest.trim_start();
            let rest = rest
                .strip_prefix(':')
                .or_else(|| rest.strip_prefix('-'))
                .unwrap_or(rest)
                .trim();
            if !rest.is_empty() {
                return Some(rest.to_string());
            }
        }
    }
    None
}

/// 按字符小写比较前缀, 返回原串中前缀之后的部分
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = line.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = rest.next().map(|(idx, _)| idx).unwrap_or(line.len());
    Some(&line[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_value_after_label() {
        let lines = ["Foo: bar", "Total: 100"];
        assert_eq!(extract_label(&lines, &["Total"]), Some("100".to_string()));
        assert_eq!(extract_label(&["nothing here"], &["Total"]), None);
    }

    #[test]
    fn matches_accented_uppercase_lines() {
        let lines = ["  TỔNG TIỀN: 150.000đ  "];
        assert_eq!(extract_label(&lines, TOTAL_LABELS), Some("150.000đ".to_string()));
    }

    #[test]
    fn matches_unaccented_spelling_and_dash() {
        let lines = ["Khach hang - Nguyen Van A - 0901234567"];
        assert_eq!(
            extract_label(&lines, CUSTOMER_LABELS),
            Some("Nguyen Van A - 0901234567".to_string())
        );
    }

    #[test]
    fn empty_value_keeps_scanning() {
        let lines = ["Tổng tiền:", "Tổng tiền: 99.000"];
        assert_eq!(extract_label(&lines, TOTAL_LABELS), Some("99.000".to_string()));
    }

    #[test]
    fn first_line_wins_over_first_alias() {
        let lines = ["Phương thức: QR", "Phương thức thanh toán: Tiền mặt"];
        assert_eq!(extract_label(&lines, PAYMENT_LABELS), Some("QR".to_string()));
    }

    #[test]
    fn amount_paid_line_is_not_payment_method() {
        let lines = ["Thanh toán: 150.000đ", "Phương thức: Tiền mặt"];
        assert_eq!(extract_label(&lines, PAYMENT_LABELS), Some("Tiền mặt".to_string()));
    }

    #[test]
    fn invoice_date_line_is_not_invoice_id() {
        let lines = ["Invoice date: 18/10/2026", "Invoice No: HD-0042"];
        assert_eq!(extract_label(&lines, INVOICE_ID_LABELS), Some("HD-0042".to_string()));
    }

    #[test]
    fn longer_alias_is_stripped_whole() {
        let lines = ["Phương thức thanh toán: Tiền mặt"];
        assert_eq!(extract_label(&lines, PAYMENT_LABELS), Some("Tiền mặt".to_string()));
    }
}
