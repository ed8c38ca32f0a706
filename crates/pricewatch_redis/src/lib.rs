pub mod keys;
pub mod operations;

pub use keys::StoreKeys;
pub use operations::RedisStore;
