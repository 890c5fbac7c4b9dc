pub mod alerts;
pub mod daemon;
pub mod report;
