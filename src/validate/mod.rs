pub mod calendar;
pub mod datetime;

pub use datetime::{
    DEFAULT_FORMATS, DatetimeValidator, ErrorKind, MatchOutcome, ValidatorOptions, match_datetime,
};
