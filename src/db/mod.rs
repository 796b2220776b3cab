//! Durable storage layer.
//!
//! The session only ever needs one string blob under one key, so backends
//! expose a minimal key-value contract.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::AppError;

/// Storage keys as constants.
pub mod keys {
    /// Serialized workout list
    pub const WORKOUTS: &str = "workouts";
}

/// Single-slot key-value string store that survives restarts.
pub trait DurableBackend {
    /// Read the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

impl<B: DurableBackend + ?Sized> DurableBackend for &B {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}
