use crate::format::{DateField, FormatPattern, PatternError};
use crate::validate::{ErrorKind, MatchOutcome, match_datetime};
use std::fmt;

/// Rejection raised by [`Date::set_from_format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
}

impl DateError {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid datetime input: {}", self.kind)
    }
}

impl std::error::Error for DateError {}

/// Calendar-aware value object that populates its fields from a user
/// string in a given format. Only the fields the format names are touched,
/// so a time-only format updates the clock and leaves the date alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Date {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    pub fn field(&self, field: DateField) -> u32 {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Day => self.day,
            DateField::Hour => self.hour,
            DateField::Minute => self.minute,
            DateField::Second => self.second,
        }
    }

    /// Validate `input` against `format` and merge the matched fields over
    /// the current ones.
    ///
    /// A two-digit year (`y`) lands in 2000-2099.
    pub fn set_from_format(&mut self, format: &str, input: &str) -> Result<(), DateError> {
        let pattern = FormatPattern::parse(format).map_err(|_| DateError {
            kind: ErrorKind::InvalidFormat,
        })?;

        let parts = match match_datetime(input, std::slice::from_ref(&pattern)) {
            MatchOutcome::Matched { parts, .. } => parts,
            MatchOutcome::Rejected { error, .. } => return Err(DateError { kind: error }),
        };

        if let Some(year) = parts.numeric(DateField::Year) {
            let two_digit = parts.get(DateField::Year).map(str::len) == Some(2);
            self.year = if two_digit { 2000 + year } else { year };
        }
        if let Some(month) = parts.numeric(DateField::Month) {
            self.month = month;
        }
        if let Some(day) = parts.numeric(DateField::Day) {
            self.day = day;
        }
        if let Some(hour) = parts.numeric(DateField::Hour) {
            self.hour = hour;
        }
        if let Some(minute) = parts.numeric(DateField::Minute) {
            self.minute = minute;
        }
        if let Some(second) = parts.numeric(DateField::Second) {
            self.second = second;
        }
        Ok(())
    }

    /// Render the current fields through a format string.
    pub fn format(&self, format: &str) -> Result<String, PatternError> {
        let pattern = FormatPattern::parse(format)?;
        pattern.render(|field| Some(self.field(field)))
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(1970, 1, 1)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
