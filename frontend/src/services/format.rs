/// Format an amount in the user's currency with en-IN digit grouping
/// (`12,34,567.50`). Known codes get their symbol, anything else is
/// prefixed with the code itself.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let symbol = match currency.to_ascii_uppercase().as_str() {
        "INR" => Some("₹"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        _ => None,
    };

    match symbol {
        Some(symbol) if amount < 0.0 => format!("-{}{}", symbol, group_digits(amount.abs())),
        Some(symbol) => format!("{}{}", symbol, group_digits(amount)),
        None if amount < 0.0 => format!("{} -{}", currency, group_digits(amount.abs())),
        None => format!("{} {}", currency, group_digits(amount)),
    }
}

/// Two decimals, last three integer digits grouped, then pairs
fn group_digits(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    if integer.len() <= 3 {
        return format!("{}.{}", integer, fraction);
    }

    let (head, tail) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}.{}", groups.join(","), tail, fraction)
}

/// Categorisation confidence as a percentage; absent or zero shows a dash
pub fn format_confidence(confidence: Option<f64>) -> String {
    match confidence {
        Some(value) if value > 0.0 => format!("{:.0}%", value * 100.0),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_currencies() {
        assert_eq!(format_currency(1234.5, "INR"), "₹1,234.50");
        assert_eq!(format_currency(10.0, "usd"), "$10.00");
        assert_eq!(format_currency(0.0, "EUR"), "€0.00");
    }

    #[test]
    fn test_indian_digit_grouping() {
        assert_eq!(format_currency(999.0, "INR"), "₹999.00");
        assert_eq!(format_currency(100000.0, "INR"), "₹1,00,000.00");
        assert_eq!(format_currency(1234567.5, "USD"), "$12,34,567.50");
        assert_eq!(format_currency(999.999, "INR"), "₹1,000.00");
    }

    #[test]
    fn test_negative_amounts_keep_sign_before_symbol() {
        assert_eq!(format_currency(-500.0, "INR"), "-₹500.00");
        assert_eq!(format_currency(-25000.0, "EUR"), "-€25,000.00");
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(format_currency(42.0, "GBP"), "GBP 42.00");
        assert_eq!(format_currency(-1500.0, "GBP"), "GBP -1,500.00");
    }

    #[test]
    fn test_confidence() {
        assert_eq!(format_confidence(Some(0.87)), "87%");
        assert_eq!(format_confidence(Some(0.0)), "—");
        assert_eq!(format_confidence(None), "—");
    }
}
