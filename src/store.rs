// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory workout collection for a session.
//!
//! Insertion order is display order and persisted order. Ids never repeat.

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutId};
use std::collections::HashSet;

/// Ordered, duplicate-free list of workouts.
#[derive(Debug, Default, Clone)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a workout at the end.
    ///
    /// Fails with `DuplicateId` and leaves the store untouched if the id is
    /// already present.
    pub fn append(&mut self, workout: Workout) -> Result<()> {
        if self.contains(&workout.id) {
            return Err(AppError::DuplicateId(workout.id));
        }
        self.workouts.push(workout);
        Ok(())
    }

    /// All workouts in insertion order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Result<&Workout> {
        self.workouts
            .iter()
            .find(|w| &w.id == id)
            .ok_or_else(|| AppError::NotFound(id.clone()))
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &WorkoutId) -> Result<&mut Workout> {
        self.workouts
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| AppError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.workouts.iter().any(|w| &w.id == id)
    }

    /// Replace the whole collection with reloaded workouts.
    ///
    /// Records are trusted as-is. A record whose id repeats an earlier one
    /// is dropped. Returns the number of records dropped.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) -> usize {
        let incoming = workouts.len();
        let mut seen = HashSet::with_capacity(incoming);
        self.workouts = workouts
            .into_iter()
            .filter(|w| seen.insert(w.id.clone()))
            .collect();

        let dropped = incoming - self.workouts.len();
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped reloaded workouts with duplicate ids");
        }
        dropped
    }

    pub fn reset(&mut self) {
        self.workouts.clear();
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coords, WorkoutMetrics};
    use chrono::{TimeZone, Utc};

    fn make_workout(id: &str) -> Workout {
        Workout::new(
            WorkoutId::new(id),
            Utc.with_ymd_and_hms(2026, 4, 14, 9, 0, 0).unwrap(),
            Coords::new(51.5, -0.1),
            5.0,
            25.0,
            WorkoutMetrics::running(5.0, 25.0, 150.0),
        )
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = WorkoutStore::new();
        store.append(make_workout("a")).unwrap();
        store.append(make_workout("b")).unwrap();
        store.append(make_workout("c")).unwrap();

        let ids: Vec<&str> = store.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut store = WorkoutStore::new();
        store.append(make_workout("a")).unwrap();

        let err = store.append(make_workout("a")).unwrap_err();

        assert!(matches!(err, AppError::DuplicateId(id) if id.as_str() == "a"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_by_id() {
        let mut store = WorkoutStore::new();
        store.append(make_workout("a")).unwrap();

        assert!(store.find_by_id(&WorkoutId::new("a")).is_ok());
        assert!(matches!(
            store.find_by_id(&WorkoutId::new("missing")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_replace_all_drops_repeated_ids() {
        let mut store = WorkoutStore::new();
        store.append(make_workout("old")).unwrap();

        let dropped = store.replace_all(vec![
            make_workout("a"),
            make_workout("b"),
            make_workout("a"),
        ]);

        assert_eq!(dropped, 1);
        let ids: Vec<&str> = store.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_reset_empties_store() {
        let mut store = WorkoutStore::new();
        store.append(make_workout("a")).unwrap();
        store.reset();
        assert!(store.is_empty());
        store.reset();
        assert!(store.is_empty());
    }
}
