//! Cache domain - key-value store boundary with TTL

pub mod repository;

pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
