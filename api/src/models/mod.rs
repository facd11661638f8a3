//! Data transfer records for both services.
//!
//! Each record implements [`Record`](crate::Record) and validates its fields
//! on construction and on every setter call. Only a representative subset of
//! the upstream resources is modelled.

pub mod nifi;
pub mod registry;
