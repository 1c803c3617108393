use crate::format::{DateField, DateParts, FormatPattern, PatternError};
use crate::validate::calendar::days_in_month;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why an input was rejected. Exactly one kind per failed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// The input fits none of the attempted formats.
    #[serde(rename = "invalidFormat")]
    InvalidFormat,
    /// The input fits a format but breaks a calendar or range rule.
    #[serde(rename = "invalidDate")]
    InvalidDate,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalidFormat",
            ErrorKind::InvalidDate => "invalidDate",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one match attempt.
///
/// A rejection still names the format when the input matched structurally
/// but failed calendar validation: format resolution happens before date
/// validation, and the resolved format stays observable either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Matched {
        format: String,
        parts: DateParts,
    },
    Rejected {
        format: Option<String>,
        error: ErrorKind,
    },
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }
}

/// Built-in candidate formats, in priority order. ISO layouts come first
/// so numeric-only input never falls through to an endian heuristic; the
/// little-endian one-or-two-digit pair precedes its big-endian mirror.
pub const DEFAULT_FORMATS: [&str; 10] = [
    "Y-m-d H:i:s",
    "Y-m-d",
    "j/n/Y",
    "j.n.Y",
    "d/m/Y",
    "d.m.Y",
    "Y/n/j",
    "Y.n.j",
    "Y/m/d",
    "Y.m.d",
];

/// Match `input` against `patterns` in order; the first structural match
/// wins and the scan stops there, even if calendar validation then fails.
pub fn match_datetime(input: &str, patterns: &[FormatPattern]) -> MatchOutcome {
    for pattern in patterns {
        let Some(parts) = pattern.extract(input) else {
            continue;
        };
        return match check_calendar(&parts) {
            Ok(()) => MatchOutcome::Matched {
                format: pattern.source().to_string(),
                parts,
            },
            Err(error) => MatchOutcome::Rejected {
                format: Some(pattern.source().to_string()),
                error,
            },
        };
    }
    MatchOutcome::Rejected {
        format: None,
        error: ErrorKind::InvalidFormat,
    }
}

fn check_calendar(parts: &DateParts) -> Result<(), ErrorKind> {
    let month = parts.numeric(DateField::Month);
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(ErrorKind::InvalidDate);
        }
    }
    if let Some(day) = parts.numeric(DateField::Day) {
        let limit = match month {
            Some(month) => days_in_month(month, parts.numeric(DateField::Year)),
            // No month in the format: only the longest month bounds the day.
            None => 31,
        };
        if day < 1 || day > limit {
            return Err(ErrorKind::InvalidDate);
        }
    }
    if let Some(hour) = parts.numeric(DateField::Hour) {
        if hour > 23 {
            return Err(ErrorKind::InvalidDate);
        }
    }
    if let Some(minute) = parts.numeric(DateField::Minute) {
        if minute > 59 {
            return Err(ErrorKind::InvalidDate);
        }
    }
    if let Some(second) = parts.numeric(DateField::Second) {
        if second > 59 {
            return Err(ErrorKind::InvalidDate);
        }
    }
    Ok(())
}

/// Construction options, deserializable from a YAML or JSON config block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorOptions {
    /// Replaces the whole format list when present.
    pub formats: Option<Vec<String>>,
    /// Start with an empty format list instead of [`DEFAULT_FORMATS`].
    pub disable_load_default_formats: bool,
}

impl ValidatorOptions {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// Stateful detector over [`match_datetime`]: keeps a registered format
/// list and remembers the outcome of the most recent `is_valid*` call for
/// the after-the-fact accessors. Each call overwrites that state, so an
/// instance is not meant to be shared without external serialization.
#[derive(Debug, Clone)]
pub struct DatetimeValidator {
    patterns: Vec<FormatPattern>,
    matched_format: Option<String>,
    matched_parts: Option<DateParts>,
    errors: Vec<ErrorKind>,
}

impl DatetimeValidator {
    /// Validator preloaded with [`DEFAULT_FORMATS`].
    pub fn new() -> Self {
        let patterns = DEFAULT_FORMATS
            .iter()
            .map(|format| FormatPattern::parse(format).expect("built-in format must compile"))
            .collect();
        Self {
            patterns,
            matched_format: None,
            matched_parts: None,
            errors: Vec::new(),
        }
    }

    /// Validator with no registered formats; implicit matches fail with
    /// [`ErrorKind::InvalidFormat`] until formats are registered.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
            matched_format: None,
            matched_parts: None,
            errors: Vec::new(),
        }
    }

    pub fn from_options(options: ValidatorOptions) -> Result<Self, PatternError> {
        let mut validator = if options.disable_load_default_formats {
            Self::empty()
        } else {
            Self::new()
        };
        if let Some(formats) = &options.formats {
            validator.set_formats(formats)?;
        }
        Ok(validator)
    }

    pub fn formats(&self) -> Vec<&str> {
        self.patterns.iter().map(FormatPattern::source).collect()
    }

    /// Replaces the whole registered format list; remembered match state
    /// is left untouched.
    pub fn set_formats<S: AsRef<str>>(&mut self, formats: &[S]) -> Result<(), PatternError> {
        self.patterns = formats
            .iter()
            .map(|format| FormatPattern::parse(format.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Scan the registered formats in priority order.
    pub fn is_valid(&mut self, input: &str) -> bool {
        let outcome = match_datetime(input, &self.patterns);
        self.remember(outcome)
    }

    /// Try only `format`, bypassing the registered list. A format string
    /// that does not compile records [`ErrorKind::InvalidFormat`].
    pub fn is_valid_with_format(&mut self, input: &str, format: &str) -> bool {
        let outcome = match FormatPattern::parse(format) {
            Ok(pattern) => match_datetime(input, std::slice::from_ref(&pattern)),
            Err(_) => MatchOutcome::Rejected {
                format: None,
                error: ErrorKind::InvalidFormat,
            },
        };
        self.remember(outcome)
    }

    /// Format resolved by the last call; set even when calendar validation
    /// failed afterwards, `None` after a structural mismatch.
    pub fn matched_format(&self) -> Option<&str> {
        self.matched_format.as_deref()
    }

    /// Parts captured by the last call; `None` unless it fully succeeded.
    pub fn matched_parts(&self) -> Option<&DateParts> {
        self.matched_parts.as_ref()
    }

    /// Errors from the last call; empty after a success.
    pub fn errors(&self) -> &[ErrorKind] {
        self.errors.as_slice()
    }

    fn remember(&mut self, outcome: MatchOutcome) -> bool {
        match outcome {
            MatchOutcome::Matched { format, parts } => {
                self.matched_format = Some(format);
                self.matched_parts = Some(parts);
                self.errors = Vec::new();
                true
            }
            MatchOutcome::Rejected { format, error } => {
                self.matched_format = format;
                self.matched_parts = None;
                self.errors = vec![error];
                false
            }
        }
    }
}

impl Default for DatetimeValidator {
    fn default() -> Self {
        Self::new()
    }
}
