//! Proleptic Gregorian month lengths and leap years.

pub fn is_leap_year(year: u32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month`. With no year to check against, February
/// admits the leap-day maximum of 29, so a year-less format like `d.m`
/// never rejects a day that some year could carry.
pub fn days_in_month(month: u32, year: Option<u32>) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => match year {
            Some(year) if !is_leap_year(year) => 28,
            _ => 29,
        },
        _ => 0,
    }
}
