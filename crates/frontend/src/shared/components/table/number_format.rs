//! Number formatting for table cells.

/// Inserts `,` every three digits of the integer part.
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Two decimals with thousands separators.
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

pub fn format_count(value: i64) -> String {
    format_number_with_decimals(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(999.999), "1,000.00");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1234567), "1,234,567");
        assert_eq!(format_count(12), "12");
    }
}
