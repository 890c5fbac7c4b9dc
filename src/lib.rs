//! Weather monitoring engine: polls current weather for a configured set
//! of locations, persists observations, detects sustained temperature
//! threshold breaches, and rolls each day up into a deterministic summary.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
