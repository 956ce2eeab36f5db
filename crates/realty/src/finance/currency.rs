use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Short rupee label: crores above ₹1 Cr, lakhs above ₹1 L, grouped digits otherwise.
pub fn format_indian_price(price: Decimal) -> String {
    let amount = price.to_f64().unwrap_or_default();

    if amount >= CRORE {
        let crores = amount / CRORE;
        format!("₹{crores:.1} Crore{}", if crores > 1.0 { "s" } else { "" })
    } else if amount >= LAKH {
        let lakhs = amount / LAKH;
        format!("₹{lakhs:.1} Lakh{}", if lakhs > 1.0 { "s" } else { "" })
    } else {
        format!("₹{}", group_indian_digits(price.round().to_i64().unwrap_or_default()))
    }
}

/// Indian digit grouping: last three digits, then pairs (`1,04,13,879`).
pub fn group_indian_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let sign = if value < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{sign}{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{sign}{},{tail}", groups.join(","))
}
