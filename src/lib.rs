pub mod date;
pub mod format;
pub mod validate;

pub use date::{Date, DateError};
pub use format::{DateField, DateParts, FormatPattern, FormatToken, PatternError};
pub use validate::{
    DEFAULT_FORMATS, DatetimeValidator, ErrorKind, MatchOutcome, ValidatorOptions, match_datetime,
};
