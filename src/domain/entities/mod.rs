pub mod alert;
pub mod observation;
pub mod summary;

pub use alert::ThresholdAlert;
pub use observation::Observation;
pub use summary::DailySummary;
