//! Domain utilities

pub mod fields;
pub mod keys;
