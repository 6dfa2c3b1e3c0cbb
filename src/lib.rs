//! Sustainability scoring for the ASOS dashboard: a pure scoring engine
//! (score, estimated carbon, suggestions), policy impact aggregation, and a
//! community-scale simulation, driven by a read-only constants table.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod types;
