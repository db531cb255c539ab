//! Shared test support for core workflow tests

#![allow(dead_code)]

pub mod repositories;

pub use repositories::*;
