#![forbid(unsafe_code)]

pub mod bank;
pub mod model;
pub mod shuffle;
pub mod time;

pub use bank::{ParsedBank, RecordError, RejectedRecord, parse_bank};
pub use shuffle::Shuffler;
pub use time::Clock;
