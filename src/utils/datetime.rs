//! Pure date utility functions

/// Calculate age from birth year
pub fn calculate_age(birth_year: i32, current_year: i32) -> i32 {
    current_year - birth_year
}

/// Validate if a month/day combination occurs in some year
pub fn is_valid_date(month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }

    let max_day = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 29, // Allow Feb 29 for leap years
        _ => return false,
    };

    (1..=max_day).contains(&day)
}

/// Format a date as "Day MonthName" (e.g., "15 March")
pub fn format_date_display(month: i32, day: i32) -> String {
    let month_name = get_month_name(month);
    format!("{} {}", day, month_name)
}

/// Get month name from month number (1-12)
pub fn get_month_name(month: i32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_age() {
        assert_eq!(calculate_age(1990, 2025), 35);
        assert_eq!(calculate_age(1995, 1995), 0);
    }

    #[test]
    fn test_is_valid_date() {
        assert!(is_valid_date(1, 31));
        assert!(is_valid_date(2, 29)); // Leap day allowed
        assert!(is_valid_date(4, 30));

        assert!(!is_valid_date(0, 15));
        assert!(!is_valid_date(13, 15));
        assert!(!is_valid_date(2, 30));
        assert!(!is_valid_date(4, 31));
        assert!(!is_valid_date(6, 0));
    }

    #[test]
    fn test_format_date_display() {
        assert_eq!(format_date_display(3, 15), "15 March");
        assert_eq!(format_date_display(1, 1), "1 January");
    }

    #[test]
    fn test_get_month_name() {
        assert_eq!(get_month_name(1), "January");
        assert_eq!(get_month_name(12), "December");
        assert_eq!(get_month_name(0), "Unknown");
        assert_eq!(get_month_name(13), "Unknown");
    }
}
