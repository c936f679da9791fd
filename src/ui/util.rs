use rust_decimal::Decimal;

pub(crate) const CURRENCY: &str = "₹";

/// Format a decimal amount with Indian digit grouping and 2 decimal places.
/// e.g. `-1234567.891` → `"-₹12,34,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    with_currency(val, 2)
}

/// Whole-rupee variant used for category breakdowns, e.g. `"₹1,23,457"`.
pub(crate) fn format_whole(val: Decimal) -> String {
    with_currency(val, 0)
}

fn with_currency(val: Decimal, dp: u32) -> String {
    let abs = val.abs().round_dp(dp);
    let formatted = format!("{abs:.prec$}", prec = dp as usize);
    let (int_part, dec_part) = match formatted.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (formatted.as_str(), None),
    };

    let grouped = group_lakh(int_part);
    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match dec_part {
        Some(dec_part) => format!("{sign}{CURRENCY}{grouped}.{dec_part}"),
        None => format!("{sign}{CURRENCY}{grouped}"),
    }
}

/// Last three digits, then pairs: `1234567` → `12,34,567`.
fn group_lakh(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = head
        .as_bytes()
        .rchunks(2)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect();
    groups.push(tail);
    groups.join(",")
}

/// Amount with an explicit direction marker, as shown in the list:
/// `+₹50.00` for income, `-₹12.50` for expenses.
pub(crate) fn format_signed(val: Decimal) -> String {
    if val >= Decimal::ZERO {
        format!("+{}", format_amount(val))
    } else {
        format_amount(val)
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// Capitalize the first character, e.g. `food` → `Food`.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
