pub mod error;
pub mod money;
pub mod search;
pub mod time_format;
