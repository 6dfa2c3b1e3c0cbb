pub mod config;
pub mod reading;
pub mod report;
