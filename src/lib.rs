//! Digital Readiness - Scoring engine for digital maturity assessments
//!
//! This crate turns an organization's per-axis and per-area maturity levels
//! into gap priorities, aggregate statistics, industry benchmark percentiles,
//! a five-year financial projection and quadrant groupings of initiatives
//! and risks.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
