//! Formatting and markup helpers shared by the rendering layer

/// Insert `,` between every group of three digits
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format an amount as `$1,234.50`; a missing amount renders as `$0.00`
pub fn format_currency(amount: Option<f64>) -> String {
    let value = match amount {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    };
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // "-0.00" would be noise for amounts that round to zero
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("${}{}.{}", sign, group_thousands(whole), fraction)
}

/// Escape text for interpolation into markup
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_format_currency_missing_is_zero() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(f64::NAN)), "$0.00");
    }

    #[test]
    fn test_format_currency_values() {
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_currency(Some(-1234.5)), "$-1,234.50");
        assert_eq!(format_currency(Some(-0.001)), "$0.00");
        assert_eq!(format_currency(Some(12.345678)), "$12.35");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>A & B</b>"), "&lt;b&gt;A &amp; B&lt;/b&gt;");
        assert_eq!(escape_html("O'Neil \"Jr\""), "O&#39;Neil &quot;Jr&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("savings"), "Savings");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }
}
