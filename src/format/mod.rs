pub mod pattern;
pub mod token;

pub use pattern::{FormatPattern, PatternError};
pub use token::{DateField, FormatToken};

use indexmap::IndexMap;
use serde::Serialize;

/// Matched field texts, in the order the fields appear in the pattern.
/// Values keep the source text verbatim, leading zeros included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateParts(IndexMap<DateField, String>);

impl DateParts {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, field: DateField, text: impl Into<String>) {
        self.0.insert(field, text.into());
    }

    pub fn get(&self, field: DateField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn numeric(&self, field: DateField) -> Option<u32> {
        self.get(field).and_then(|text| text.parse().ok())
    }

    pub fn contains(&self, field: DateField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DateField, &str)> {
        self.0.iter().map(|(field, text)| (*field, text.as_str()))
    }
}
