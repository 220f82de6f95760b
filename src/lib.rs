//! Offline memory-leak trend analysis for per-process resource samples.
//!
//! Samples are grouped per process, each series is classified by comparing
//! its first and last deciles, and the RSS trend is drawn as a block chart.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
