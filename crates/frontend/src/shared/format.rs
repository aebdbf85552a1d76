//! Number formatting for prices and totals ("$ 1.473,00")

/// Groups the integer part with `.` every three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(c);
    }
    result
}

/// Formats an amount in cents with `.` thousands and `,` decimals
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}$ {},{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Formats a currency amount, rounded to two decimals
pub fn format_money(value: f64) -> String {
    format_cents((value * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1473.0), "$ 1.473,00");
        assert_eq!(format_money(3500.5), "$ 3.500,50");
        assert_eq!(format_money(0.0), "$ 0,00");
        assert_eq!(format_money(-1234.56), "-$ 1.234,56");
        assert_eq!(format_money(0.005), "$ 0,01");
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1473), "$ 14,73");
        assert_eq!(format_cents(443100), "$ 4.431,00");
        assert_eq!(format_cents(5), "$ 0,05");
    }
}
