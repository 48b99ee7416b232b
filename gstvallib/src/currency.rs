//! Форматирование сумм в индийской системе разрядов: последние три цифры —
//! одна группа, дальше группы по две (лакхи и кроры).

use rust_decimal::Decimal;

/// `None` и неразборчивый ввод отдаются как "₹0", без паники.
/// Дробная часть округляется до двух знаков; целые суммы — без неё.
pub fn format_inr(amount: Option<Decimal>) -> String {
    let a = match amount {
        Some(a) => a.round_dp(2),
        None => return "₹0".to_string(),
    };
    let neg = a.is_sign_negative() && !a.is_zero();
    let s = a.abs().to_string();
    let (units, fract) = match s.split_once('.') {
        Some((u, f)) => (u, f),
        None => (s.as_str(), ""),
    };
    let mut out = group_lakh(units);
    if !fract.is_empty() && fract.chars().any(|c| c != '0') {
        out.push('.');
        out.push_str(fract);
        if fract.len() == 1 {
            out.push('0');
        }
    }
    if neg {
        format!("-₹{out}")
    } else {
        format!("₹{out}")
    }
}

/// Парс + формат для сырого строкового ввода форм.
pub fn format_inr_text(value: &str) -> String {
    format_inr(value.trim().parse::<Decimal>().ok())
}

fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
