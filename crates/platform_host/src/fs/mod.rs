//! Static portfolio catalog exposed as a read-only virtual filesystem.

pub mod catalog;
pub mod path;
pub mod types;
