//! Configuration lookups with override-then-ambient precedence

mod env_resolver;

pub use env_resolver::{EnvironmentResolver, ResolvedEntry, ResolverMode, ValueSource};
