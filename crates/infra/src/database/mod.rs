//! Database implementations

pub mod manager;
pub mod pool;
pub mod profile_repository;

pub use manager::*;
pub use pool::*;
pub use profile_repository::*;
