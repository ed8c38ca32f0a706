pub mod aggregator;
pub mod error;
pub mod ranking;
pub mod recorder;
pub mod report;

pub use aggregator::{BucketStats, aggregate};
pub use error::RecordError;
pub use ranking::{Order, RankedBucket, rank};
pub use recorder::{AssetPair, fetch_and_record, record};
pub use report::{DEFAULT_WINDOW_DAYS, Report, Window, build_report, parse_days};
