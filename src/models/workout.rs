// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model: the shared record shape plus kind-specific metrics.
//!
//! Derived values (pace, speed, description) are computed once when a
//! workout is built and then carried as plain data. A workout read back
//! from storage is the same type as one created from the form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Opaque workout identifier, unique within a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Latitude/longitude pair, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/", as = "(f64, f64)")
)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<(f64, f64)> for Coords {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for (f64, f64) {
    fn from(coords: Coords) -> Self {
        (coords.lat, coords.lng)
    }
}

/// Workout discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Lowercase name used for the stored tag and CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions ("Running", "Cycling").
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific inputs and their derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutMetrics {
    Running {
        /// Steps per minute
        #[serde(rename = "cadenceSpm")]
        cadence: f64,
        /// Minutes per kilometer
        #[serde(rename = "paceMinPerKm")]
        pace: f64,
    },
    Cycling {
        /// Meters climbed; may be negative for a net descent
        #[serde(rename = "elevationGainM")]
        elevation_gain: f64,
        /// Kilometers per hour
        #[serde(rename = "speedKmPerH")]
        speed: f64,
    },
}

impl WorkoutMetrics {
    pub fn running(distance_km: f64, duration_min: f64, cadence: f64) -> Self {
        WorkoutMetrics::Running {
            cadence,
            pace: pace_min_per_km(distance_km, duration_min),
        }
    }

    pub fn cycling(distance_km: f64, duration_min: f64, elevation_gain: f64) -> Self {
        WorkoutMetrics::Cycling {
            elevation_gain,
            speed: speed_km_per_h(distance_km, duration_min),
        }
    }

    pub fn kind(&self) -> WorkoutType {
        match self {
            WorkoutMetrics::Running { .. } => WorkoutType::Running,
            WorkoutMetrics::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A logged workout. Stored as one flat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
    pub coords: Coords,
    pub distance_km: f64,
    pub duration_min: f64,
    /// Human-readable label, e.g. "Running on April 14"
    pub description: String,
    /// Times the workout was selected in the list. Written out but never
    /// read back: every reload starts from zero.
    #[serde(default, skip_deserializing)]
    pub interaction_count: u32,
    #[serde(flatten)]
    pub metrics: WorkoutMetrics,
}

impl Workout {
    /// Build a workout, deriving the description from kind and timestamp.
    ///
    /// Inputs are assumed valid; `WorkoutFactory` is the validating entry point.
    pub fn new(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance_km: f64,
        duration_min: f64,
        metrics: WorkoutMetrics,
    ) -> Self {
        let description = describe(metrics.kind(), created_at);
        Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            description,
            interaction_count: 0,
            metrics,
        }
    }

    pub fn kind(&self) -> WorkoutType {
        self.metrics.kind()
    }

    /// Pace in min/km, for running workouts.
    pub fn pace(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Running { pace, .. } => Some(pace),
            WorkoutMetrics::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, for cycling workouts.
    pub fn speed(&self) -> Option<f64> {
        match self.metrics {
            WorkoutMetrics::Cycling { speed, .. } => Some(speed),
            WorkoutMetrics::Running { .. } => None,
        }
    }

    /// Record a selection from the workout list.
    pub fn record_interaction(&mut self) {
        self.interaction_count = self.interaction_count.saturating_add(1);
    }
}

/// Running pace in minutes per kilometer.
pub fn pace_min_per_km(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Cycling speed in kilometers per hour.
pub fn speed_km_per_h(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Description shown in popups and the list, e.g. "Cycling on March 3".
pub fn describe(kind: WorkoutType, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), crate::time_utils::format_month_day(created_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn april_14() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 4, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_running_pace_is_duration_over_distance() {
        let metrics = WorkoutMetrics::running(5.0, 25.0, 150.0);
        assert_eq!(
            metrics,
            WorkoutMetrics::Running {
                cadence: 150.0,
                pace: 5.0
            }
        );
    }

    #[test]
    fn test_cycling_speed_is_km_per_hour() {
        let metrics = WorkoutMetrics::cycling(20.0, 60.0, -5.0);
        assert_eq!(
            metrics,
            WorkoutMetrics::Cycling {
                elevation_gain: -5.0,
                speed: 20.0
            }
        );
        assert_eq!(speed_km_per_h(10.0, 30.0), 20.0);
    }

    #[test]
    fn test_description_uses_kind_and_date() {
        assert_eq!(describe(WorkoutType::Running, april_14()), "Running on April 14");
        let march_3 = Utc.with_ymd_and_hms(2026, 3, 3, 0, 0, 0).unwrap();
        assert_eq!(describe(WorkoutType::Cycling, march_3), "Cycling on March 3");
    }

    #[test]
    fn test_new_workout_starts_without_interactions() {
        let workout = Workout::new(
            WorkoutId::new("w1"),
            april_14(),
            Coords::new(51.5, -0.1),
            5.0,
            25.0,
            WorkoutMetrics::running(5.0, 25.0, 150.0),
        );

        assert_eq!(workout.kind(), WorkoutType::Running);
        assert_eq!(workout.description, "Running on April 14");
        assert_eq!(workout.interaction_count, 0);
        assert_eq!(workout.pace(), Some(5.0));
        assert_eq!(workout.speed(), None);
    }

    #[test]
    fn test_serialized_record_is_flat() {
        let workout = Workout::new(
            WorkoutId::new("w1"),
            april_14(),
            Coords::new(51.5, -0.1),
            20.0,
            60.0,
            WorkoutMetrics::cycling(20.0, 60.0, 120.0),
        );

        let value = serde_json::to_value(&workout).unwrap();

        assert_eq!(value["id"], "w1");
        assert_eq!(value["kind"], "cycling");
        assert_eq!(value["coords"], serde_json::json!([51.5, -0.1]));
        assert_eq!(value["distanceKm"], 20.0);
        assert_eq!(value["durationMin"], 60.0);
        assert_eq!(value["elevationGainM"], 120.0);
        assert_eq!(value["speedKmPerH"], 20.0);
        assert_eq!(value["description"], "Cycling on April 14");
        assert_eq!(value["interactionCount"], 0);
        assert!(value.get("metrics").is_none());
    }

    #[test]
    fn test_interaction_count_is_not_read_back() {
        let mut workout = Workout::new(
            WorkoutId::new("w1"),
            april_14(),
            Coords::new(51.5, -0.1),
            5.0,
            25.0,
            WorkoutMetrics::running(5.0, 25.0, 150.0),
        );
        workout.record_interaction();
        workout.record_interaction();

        let json = serde_json::to_string(&workout).unwrap();
        assert!(json.contains("\"interactionCount\":2"));

        let restored: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.interaction_count, 0);
        assert_eq!(restored.pace(), Some(5.0));
        assert_eq!(restored.created_at, workout.created_at);
    }

    #[cfg(feature = "binding-generation")]
    #[test]
    fn test_coords_binding_is_a_pair() {
        let inline = Coords::inline(&ts_rs::Config::default());
        assert_eq!(inline, "[number, number]");
    }
}
