pub mod condition;
pub mod temperature;

pub use condition::condition_severity;
pub use temperature::TemperatureUnit;
