/// Formats an integer with thousands separators (dots)
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Formats a monetary amount with two decimals, e.g. 1234.5 -> "1234.50"
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

/// Formats a quantity, trimming a trailing ".0" for whole values
pub fn format_quantity(quantity: f64) -> String {
    if (quantity - quantity.round()).abs() < 1e-9 {
        format!("{}", quantity.round() as i64)
    } else {
        format!("{:.2}", quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(1234.5), "1234.50");
        assert_eq!(format_money(99.999), "100.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(700.0), "700");
        assert_eq!(format_quantity(2.5), "2.50");
        assert_eq!(format_quantity(1.0000000001), "1");
    }
}
