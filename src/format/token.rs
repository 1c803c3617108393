use serde::Serialize;
use std::fmt;

/// Semantic datetime component a format token captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Year => "year",
            DateField::Month => "month",
            DateField::Day => "day",
            DateField::Hour => "hour",
            DateField::Minute => "minute",
            DateField::Second => "second",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One character of the format grammar.
///
/// Zero-padded tokens match an exact digit width. The no-padding tokens
/// (`n`, `j`, `G`) refuse a leading zero, which is what keeps the
/// one-or-two-digit layouts from swallowing padded input: `09.4.2011`
/// must not be read as day 9, month 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatToken {
    /// `Y` - four-digit year
    Year4,
    /// `y` - two-digit year
    Year2,
    /// `m` - zero-padded month
    MonthPadded,
    /// `n` - month without padding
    Month,
    /// `d` - zero-padded day
    DayPadded,
    /// `j` - day without padding
    Day,
    /// `H` - zero-padded 24h hour
    HourPadded,
    /// `G` - 24h hour without padding
    Hour,
    /// `i` - zero-padded minute
    Minute,
    /// `s` - zero-padded second
    Second,
}

impl FormatToken {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'Y' => Some(FormatToken::Year4),
            'y' => Some(FormatToken::Year2),
            'm' => Some(FormatToken::MonthPadded),
            'n' => Some(FormatToken::Month),
            'd' => Some(FormatToken::DayPadded),
            'j' => Some(FormatToken::Day),
            'H' => Some(FormatToken::HourPadded),
            'G' => Some(FormatToken::Hour),
            'i' => Some(FormatToken::Minute),
            's' => Some(FormatToken::Second),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            FormatToken::Year4 => 'Y',
            FormatToken::Year2 => 'y',
            FormatToken::MonthPadded => 'm',
            FormatToken::Month => 'n',
            FormatToken::DayPadded => 'd',
            FormatToken::Day => 'j',
            FormatToken::HourPadded => 'H',
            FormatToken::Hour => 'G',
            FormatToken::Minute => 'i',
            FormatToken::Second => 's',
        }
    }

    pub fn field(&self) -> DateField {
        match self {
            FormatToken::Year4 | FormatToken::Year2 => DateField::Year,
            FormatToken::MonthPadded | FormatToken::Month => DateField::Month,
            FormatToken::DayPadded | FormatToken::Day => DateField::Day,
            FormatToken::HourPadded | FormatToken::Hour => DateField::Hour,
            FormatToken::Minute => DateField::Minute,
            FormatToken::Second => DateField::Second,
        }
    }

    pub fn is_padded(&self) -> bool {
        !matches!(
            self,
            FormatToken::Month | FormatToken::Day | FormatToken::Hour
        )
    }

    /// Regex fragment matching this token, to be wrapped in a capture group.
    pub fn regex_fragment(&self) -> &'static str {
        match self {
            FormatToken::Year4 => r"\d{4}",
            FormatToken::Year2
            | FormatToken::MonthPadded
            | FormatToken::DayPadded
            | FormatToken::HourPadded
            | FormatToken::Minute
            | FormatToken::Second => r"\d{2}",
            // No leading zero; zero itself is not a valid month or day.
            FormatToken::Month | FormatToken::Day => r"[1-9]\d?",
            // Hour zero is legal unpadded.
            FormatToken::Hour => r"0|[1-9]\d?",
        }
    }

    /// Render a numeric value the way this token spells it.
    pub fn render(&self, value: u32) -> String {
        match self {
            FormatToken::Year4 => format!("{value:04}"),
            FormatToken::Year2 => format!("{:02}", value % 100),
            FormatToken::MonthPadded
            | FormatToken::DayPadded
            | FormatToken::HourPadded
            | FormatToken::Minute
            | FormatToken::Second => format!("{value:02}"),
            FormatToken::Month | FormatToken::Day | FormatToken::Hour => value.to_string(),
        }
    }
}
