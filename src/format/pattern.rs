use crate::format::token::{DateField, FormatToken};
use crate::format::DateParts;
use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    message: String,
}

impl PatternError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for PatternError {}

/// A compiled datetime format: tokens interleaved with literal separators,
/// backed by a regex anchored to the whole input.
///
/// `separators[i]` precedes `tokens[i]`; the final entry trails the last
/// token. Separators are regex-escaped before compilation, so a format is
/// always treated as its own small grammar rather than raw regex text.
#[derive(Debug, Clone)]
pub struct FormatPattern {
    source: String,
    tokens: Vec<FormatToken>,
    separators: Vec<String>,
    regex: Regex,
}

impl FormatPattern {
    pub fn parse(format: &str) -> Result<Self, PatternError> {
        let mut tokens = Vec::new();
        let mut separators = Vec::new();
        let mut current_sep = String::new();

        for ch in format.chars() {
            if let Some(token) = FormatToken::from_char(ch) {
                separators.push(std::mem::take(&mut current_sep));
                tokens.push(token);
            } else {
                current_sep.push(ch);
            }
        }
        separators.push(current_sep);

        if tokens.is_empty() {
            return Err(PatternError::new(format!(
                "format '{format}' contains no datetime tokens"
            )));
        }

        let mut pattern = String::from("^");
        for (i, token) in tokens.iter().enumerate() {
            pattern.push_str(&regex::escape(&separators[i]));
            pattern.push('(');
            pattern.push_str(token.regex_fragment());
            pattern.push(')');
        }
        if let Some(trailing) = separators.last() {
            pattern.push_str(&regex::escape(trailing));
        }
        pattern.push('$');

        let regex = Regex::new(&pattern)
            .map_err(|err| PatternError::new(format!("format '{format}': {err}")))?;

        Ok(Self {
            source: format.to_string(),
            tokens,
            separators,
            regex,
        })
    }

    /// Canonical token string this pattern was parsed from, e.g. `"Y-m-d"`.
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    pub fn tokens(&self) -> &[FormatToken] {
        self.tokens.as_slice()
    }

    pub fn fields(&self) -> impl Iterator<Item = DateField> + '_ {
        self.tokens.iter().map(FormatToken::field)
    }

    pub fn has_field(&self, field: DateField) -> bool {
        self.fields().any(|f| f == field)
    }

    /// Structural match against the whole input. Returns the captured part
    /// texts in token order, or `None` when the layout does not fit.
    pub fn extract(&self, input: &str) -> Option<DateParts> {
        let caps = self.regex.captures(input)?;
        let mut parts = DateParts::new();
        for (i, token) in self.tokens.iter().enumerate() {
            let text = caps.get(i + 1)?.as_str();
            parts.insert(token.field(), text);
        }
        Some(parts)
    }

    /// Inverse of [`extract`](Self::extract): spell numeric field values
    /// through this pattern's tokens and separators.
    pub fn render<F>(&self, value_of: F) -> Result<String, PatternError>
    where
        F: Fn(DateField) -> Option<u32>,
    {
        let mut out = String::new();
        for (i, token) in self.tokens.iter().enumerate() {
            out.push_str(&self.separators[i]);
            let value = value_of(token.field()).ok_or_else(|| {
                PatternError::new(format!(
                    "no value for '{}' in format '{}'",
                    token.field(),
                    self.source
                ))
            })?;
            out.push_str(&token.render(value));
        }
        if let Some(trailing) = self.separators.last() {
            out.push_str(trailing);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::FormatPattern;
    use crate::format::token::{DateField, FormatToken};

    #[test]
    fn parse_splits_tokens_and_separators() {
        let pattern = FormatPattern::parse("Y-m-d H:i:s").expect("format should parse");
        assert_eq!(
            pattern.tokens(),
            &[
                FormatToken::Year4,
                FormatToken::MonthPadded,
                FormatToken::DayPadded,
                FormatToken::HourPadded,
                FormatToken::Minute,
                FormatToken::Second,
            ]
        );
        assert_eq!(pattern.source(), "Y-m-d H:i:s");
    }

    #[test]
    fn unknown_letters_are_literal_separators() {
        // 'M' is not a token; it has to appear verbatim in the input.
        let pattern = FormatPattern::parse("d.M.Y").expect("format should parse");
        assert!(pattern.extract("29.M.2011").is_some());
        assert!(pattern.extract("29.4.2011").is_none());
    }

    #[test]
    fn format_without_tokens_is_an_error() {
        assert!(FormatPattern::parse("").is_err());
        assert!(FormatPattern::parse("::--").is_err());
    }

    #[test]
    fn extract_requires_full_input() {
        let pattern = FormatPattern::parse("Y-m-d").expect("format should parse");
        assert!(pattern.extract("2011-04-01").is_some());
        assert!(pattern.extract("2011-04-01 ").is_none());
        assert!(pattern.extract("x2011-04-01").is_none());
        assert!(pattern.extract("").is_none());
    }

    #[test]
    fn extract_keeps_part_text_verbatim() {
        let pattern = FormatPattern::parse("Y-m-d").expect("format should parse");
        let parts = pattern.extract("2011-04-01").expect("structural match");
        assert_eq!(parts.get(DateField::Year), Some("2011"));
        assert_eq!(parts.get(DateField::Month), Some("04"));
        assert_eq!(parts.get(DateField::Day), Some("01"));
    }

    #[test]
    fn padded_tokens_require_exact_width() {
        let pattern = FormatPattern::parse("d.m.Y").expect("format should parse");
        assert!(pattern.extract("29.4.2011").is_none());
        assert!(pattern.extract("29.04.2011").is_some());
    }

    #[test]
    fn unpadded_tokens_reject_leading_zeros() {
        let pattern = FormatPattern::parse("j.n.Y").expect("format should parse");
        assert!(pattern.extract("9.4.2011").is_some());
        assert!(pattern.extract("09.4.2011").is_none());
        assert!(pattern.extract("29.04.2011").is_none());
    }

    #[test]
    fn unpadded_hour_allows_bare_zero() {
        let pattern = FormatPattern::parse("G:i").expect("format should parse");
        let parts = pattern.extract("0:05").expect("structural match");
        assert_eq!(parts.get(DateField::Hour), Some("0"));
        assert!(pattern.extract("00:05").is_none());
    }

    #[test]
    fn separator_metacharacters_are_escaped() {
        // '.' must match a literal dot, not any character.
        let pattern = FormatPattern::parse("d.m.Y").expect("format should parse");
        assert!(pattern.extract("29x04x2011").is_none());
    }

    #[test]
    fn leading_and_trailing_separators_match_literally() {
        let pattern = FormatPattern::parse("[Y]").expect("format should parse");
        assert!(pattern.extract("[2011]").is_some());
        assert!(pattern.extract("2011").is_none());
    }

    #[test]
    fn render_is_inverse_of_extract() {
        let pattern = FormatPattern::parse("j/n/Y").expect("format should parse");
        let text = pattern
            .render(|field| match field {
                DateField::Year => Some(2011),
                DateField::Month => Some(4),
                DateField::Day => Some(9),
                _ => None,
            })
            .expect("all fields supplied");
        assert_eq!(text, "9/4/2011");
        assert!(pattern.extract(&text).is_some());
    }

    #[test]
    fn render_fails_on_missing_field() {
        let pattern = FormatPattern::parse("H:i").expect("format should parse");
        let result = pattern.render(|field| match field {
            DateField::Hour => Some(10),
            _ => None,
        });
        assert!(result.is_err());
    }
}
