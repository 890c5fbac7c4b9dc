pub mod notifier;
pub mod provider;
pub mod store;

pub use notifier::{AlertNotifier, DispatchError};
pub use provider::{FetchError, WeatherProvider};
pub use store::{ObservationStore, StoreError, SummaryStore};
