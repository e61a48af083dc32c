//! List store provider implementations

pub mod memory;
pub mod redis;

pub use self::memory::InMemoryListStore;
pub use self::redis::RedisListStore;
