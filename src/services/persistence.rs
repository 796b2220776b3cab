// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saves the workout list to a durable backend and reads it back.
//!
//! The whole list is one JSON array stored under a single key. Reads never
//! fail: a missing or unreadable blob is an empty list.

use crate::db::{keys, DurableBackend};
use crate::error::{AppError, Result};
use crate::models::Workout;
use crate::store::WorkoutStore;

/// Workout list persistence over a key-value backend.
#[derive(Debug, Clone)]
pub struct PersistenceAdapter<B> {
    backend: B,
    key: String,
}

impl<B: DurableBackend> PersistenceAdapter<B> {
    /// Persist under the default `workouts` key.
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, keys::WORKOUTS)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write every workout in the store, in order, replacing the stored blob.
    pub fn save(&self, store: &WorkoutStore) -> Result<()> {
        let blob = encode(store.all())?;
        self.backend.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, count = store.len(), "Saved workouts");
        Ok(())
    }

    /// Read the stored workouts, or an empty list if there are none.
    pub fn load(&self) -> Vec<Workout> {
        let blob = match self.backend.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No saved workouts");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read saved workouts");
                return Vec::new();
            }
        };

        match decode(&blob) {
            Ok(workouts) => {
                tracing::info!(key = %self.key, count = workouts.len(), "Loaded workouts");
                workouts
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring malformed saved workouts");
                Vec::new()
            }
        }
    }

    /// Remove the stored blob. The caller drops its in-memory workouts.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(&self.key)?;
        tracing::info!(key = %self.key, "Cleared saved workouts");
        Ok(())
    }
}

fn encode(workouts: &[Workout]) -> Result<String> {
    serde_json::to_string(workouts)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode workouts: {}", e)))
}

fn decode(blob: &str) -> Result<Vec<Workout>> {
    serde_json::from_str(blob).map_err(|e| AppError::MalformedPersistedData(e.to_string()))
}
