use chrono::Local;
use ledger_editor::entries::parse_amount;
use serde_json::{json, Value};

/// `1200,5` becomes `R$ 1.200,50`. Unparsable amounts are shown as typed.
pub fn format_currency(amount: &str) -> String {
    let Some(value) = parse_amount(amount) else {
        return amount.to_string();
    };

    let cents = (value.abs() * 100.0).round() as i64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

pub fn today() -> String {
    Local::now().format("%d/%m/%Y").to_string()
}

/// Optional text inputs store null rather than an empty string.
pub fn optional_text(text: String) -> Value {
    if text.trim().is_empty() {
        Value::Null
    } else {
        json!(text)
    }
}
