//! Profile workflow

pub mod ports;
pub mod service;
pub mod uploads;
