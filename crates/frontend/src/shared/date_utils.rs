/// Utilities for date and time formatting
use chrono::{DateTime, Utc};

/// Example: 2023-10-15T14:30:00Z -> "15/10/2023 14:30"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

/// Example: 2023-10-15T14:30:00Z -> "15/10/2023"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        let value = Utc.with_ymd_and_hms(2023, 10, 15, 14, 30, 0).unwrap();
        assert_eq!(format_datetime(&value), "15/10/2023 14:30");

        let value = Utc.with_ymd_and_hms(2024, 1, 5, 9, 7, 59).unwrap();
        assert_eq!(format_datetime(&value), "05/01/2024 09:07");
    }

    #[test]
    fn test_format_date() {
        let value = Utc.with_ymd_and_hms(2023, 10, 14, 18, 45, 0).unwrap();
        assert_eq!(format_date(&value), "14/10/2023");
    }
}
