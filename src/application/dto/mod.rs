//! # Data Transfer Objects

pub mod analysis_summary;
