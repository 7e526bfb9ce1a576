//! 金额解析
//!
//! 发票上的金额格式不统一 (`12.500.000 đ`, `1,234.56`, `1.234,56`),
//! 逗号和点既可能是千分位也可能是小数点。规则: 取最靠右的分隔符,
//! 其后恰好 1~2 位数字才视为小数点, 否则全部分隔符都当作千分位。

use bigdecimal::{BigDecimal, ToPrimitive};
use lazy_static::lazy_static;
use regex::Regex;
use std::str::FromStr;

lazy_static! {
    static ref AMOUNT_RE: Regex = Regex::new(r"-?[0-9.,]+").expect("valid amount regex");
}

const CURRENCY_GLYPHS: [char; 6] = ['đ', 'Đ', '₫', '$', '€', '£'];

/// 将文本金额解析为精确十进制数, 无法解析时返回 None
pub fn sanitize_amount(raw: Option<&str>) -> Option<BigDecimal> {
    let raw = raw?;
    if raw.is_empty() {
        return None;
    }

    let cleaned: String = raw
        .to_lowercase()
        .replace("vnd", "")
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_GLYPHS.contains(c))
        .collect();

    // 取最长的连续数字片段
    let candidate = AMOUNT_RE
        .find_iter(&cleaned)
        .map(|m| m.as_str())
        .fold("", |best, cur| if cur.len() > best.len() { cur } else { best });
    if candidate.is_empty() {
        return None;
    }

    let (negative, body) = match candidate.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, candidate),
    };

    let separator = match (body.rfind(','), body.rfind('.')) {
        (Some(c), Some(d)) => Some(c.max(d)),
        (c, d) => c.or(d),
    };
    let decimal_at = separator.filter(|&idx| {
        let tail = &body[idx + 1..];
        (1..=2).contains(&tail.len()) && tail.bytes().all(|b| b.is_ascii_digit())
    });

    let (integer_part, fraction_part) = match decimal_at {
        Some(idx) => (&body[..idx], &body[idx + 1..]),
        None => (body, ""),
    };
    let integer: String = integer_part.chars().filter(char::is_ascii_digit).collect();
    if integer.is_empty() && fraction_part.is_empty() {
        return None;
    }

    let integer = if integer.is_empty() { "0".to_string() } else { integer };
    let literal = if fraction_part.is_empty() {
        integer
    } else {
        format!("{}.{}", integer, fraction_part)
    };

    let value = BigDecimal::from_str(&literal).ok()?;
    Some(if negative { -value } else { value })
}

/// 数据库 NUMERIC 金额转为普通数值 (无本地化歧义, 仅类型转换)
pub fn decimal_to_number(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_else(|| {
        tracing::warn!("Decimal {} cannot be represented as f64, counted as 0", value);
        0.0
    })
}
