//! Key/value stores that back configuration lookups
//!
//! - `ConfigStore` trait shared by every source
//! - `EnvStore`: read-only view of the process environment (ambient values)
//! - `MemoryStore`: immutable map filled once from the override file

mod traits;
mod env_store;
mod memory_store;

pub use traits::{ConfigStore, KeyInfo};
pub use env_store::EnvStore;
pub use memory_store::MemoryStore;
