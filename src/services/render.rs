// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View models pushed to the map and the workout list.

use crate::models::{Coords, Workout, WorkoutId, WorkoutMetrics, WorkoutType};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

const POPUP_MAX_WIDTH: u32 = 250;
const POPUP_MIN_WIDTH: u32 = 100;

/// Popup behavior for workout markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupOptions {
    fn default() -> Self {
        Self {
            max_width: POPUP_MAX_WIDTH,
            min_width: POPUP_MIN_WIDTH,
            // Popups stay open while other markers are added or the map is clicked.
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// A workout marker with its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct MarkerSpec {
    pub workout_id: WorkoutId,
    pub coords: Coords,
    pub popup_content: String,
    /// e.g. "running-popup"
    pub style_class: String,
    pub popup: PopupOptions,
}

/// One labelled value in a list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// A workout as shown in the sidebar list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub workout_id: WorkoutId,
    pub kind: WorkoutType,
    pub title: String,
    pub details: Vec<Detail>,
}

fn icon(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Running => "🏃‍♂️",
        WorkoutType::Cycling => "🚴‍♀️",
    }
}

/// Derived metrics are shown with one decimal.
fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Marker and popup for a workout.
pub fn marker_for(workout: &Workout) -> MarkerSpec {
    let kind = workout.kind();
    MarkerSpec {
        workout_id: workout.id.clone(),
        coords: workout.coords,
        popup_content: format!("{} {}", icon(kind), workout.description),
        style_class: format!("{}-popup", kind.as_str()),
        popup: PopupOptions::default(),
    }
}

/// List entry for a workout.
pub fn list_entry_for(workout: &Workout) -> ListEntry {
    let kind = workout.kind();
    let mut details = vec![
        Detail {
            icon: icon(kind),
            value: workout.distance_km.to_string(),
            unit: "km",
        },
        Detail {
            icon: "⏱",
            value: workout.duration_min.to_string(),
            unit: "min",
        },
    ];

    match workout.metrics {
        WorkoutMetrics::Running { cadence, pace } => {
            details.push(Detail {
                icon: "⚡️",
                value: one_decimal(pace),
                unit: "min/km",
            });
            details.push(Detail {
                icon: "🦶🏼",
                value: cadence.to_string(),
                unit: "spm",
            });
        }
        WorkoutMetrics::Cycling {
            elevation_gain,
            speed,
        } => {
            details.push(Detail {
                icon: "⚡️",
                value: one_decimal(speed),
                unit: "km/h",
            });
            details.push(Detail {
                icon: "⛰",
                value: elevation_gain.to_string(),
                unit: "m",
            });
        }
    }

    ListEntry {
        workout_id: workout.id.clone(),
        kind,
        title: workout.description.clone(),
        details,
    }
}
