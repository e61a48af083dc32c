//! # Key-Value List Store
//!
//! Thin async abstraction over the list primitives the task service needs
//! from its key-value store.
//!
//! ## Architecture
//!
//! ```text
//! StoreProvider (enum dispatch)        <- what the rest of the crate holds
//!   ├── Redis(RedisListStore)          <- lazily connected ConnectionManager
//!   └── Memory(InMemoryListStore)      <- process-local lists for dev and tests
//! ```
//!
//! Only four operations exist: read a whole list, append to its tail, drop
//! the key, and ping the backend.

pub mod errors;
pub mod provider;
pub mod providers;
pub mod traits;

pub use errors::{StoreError, StoreResult};
pub use provider::StoreProvider;
pub use providers::{InMemoryListStore, RedisListStore};
pub use traits::ListStore;
