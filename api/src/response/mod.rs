//! Response body parsing.
//!
//! Each endpoint names a [`ResponseFormat`] that turns the raw body of a
//! successful response into its typed output. Record responses go through
//! the schema checks of [`Record::from_value`](crate::Record::from_value),
//! so a server payload that breaks a declared constraint surfaces as a
//! [`ValidationError`](crate::ValidationError) rather than a partial value.

mod format;

pub use format::{JsonFormat, PlainTextFormat, RecordFormat, RecordListFormat, ResponseFormat};
