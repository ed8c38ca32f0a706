pub mod error;
pub mod filter;
pub mod minute_of_day;
pub mod observation;
pub mod source;
pub mod store;

pub use error::{FetchError, InvalidMinuteOfDay, StoreError};
pub use filter::ObservationFilter;
pub use minute_of_day::MinuteOfDay;
pub use observation::{NewObservation, PriceObservation};
pub use source::PriceSource;
pub use store::{MemoryStore, PriceStore};
