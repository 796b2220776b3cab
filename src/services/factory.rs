// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout construction and input validation.
//!
//! This is the only place user input is rejected. A workout either comes
//! out fully built, derived fields included, or not at all.

use crate::error::{Field, ValidationFailure};
use crate::models::{Coords, RawFields, RawValue, Workout, WorkoutId, WorkoutMetrics, WorkoutType};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of creation timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Builds validated workouts from raw form fields.
pub struct WorkoutFactory {
    clock: Box<dyn Clock>,
}

impl Default for WorkoutFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutFactory {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(clock: C) -> Self {
        Self {
            clock: Box::new(clock),
        }
    }

    /// Validate `fields` for `kind` and build a workout at `location`.
    pub fn create(
        &self,
        kind: WorkoutType,
        location: Coords,
        fields: &RawFields,
    ) -> Result<Workout, ValidationFailure> {
        let distance = fields.distance.to_number();
        let duration = fields.duration.to_number();

        let metrics = match kind {
            WorkoutType::Running => {
                let cadence = optional_number(fields.cadence.as_ref());
                validate(
                    &[
                        (Field::Distance, distance),
                        (Field::Duration, duration),
                        (Field::Cadence, cadence),
                    ],
                    &[Field::Distance, Field::Duration, Field::Cadence],
                )?;
                let metrics = WorkoutMetrics::running(distance, duration, cadence);
                if let WorkoutMetrics::Running { pace, .. } = metrics {
                    ensure_finite(Field::Distance, pace)?;
                }
                metrics
            }
            WorkoutType::Cycling => {
                let elevation = optional_number(fields.elevation.as_ref());
                // Elevation may be negative (net descent) but must be finite.
                validate(
                    &[
                        (Field::Distance, distance),
                        (Field::Duration, duration),
                        (Field::Elevation, elevation),
                    ],
                    &[Field::Distance, Field::Duration],
                )?;
                let metrics = WorkoutMetrics::cycling(distance, duration, elevation);
                if let WorkoutMetrics::Cycling { speed, .. } = metrics {
                    ensure_finite(Field::Duration, speed)?;
                }
                metrics
            }
        };

        Ok(Workout::new(
            next_id(),
            self.clock.now(),
            location,
            distance,
            duration,
            metrics,
        ))
    }
}

/// Missing values read as NaN so they fail the finiteness check.
fn optional_number(value: Option<&RawValue>) -> f64 {
    value.map(RawValue::to_number).unwrap_or(f64::NAN)
}

/// Check every value is finite, then that the listed fields are positive.
fn validate(values: &[(Field, f64)], positive: &[Field]) -> Result<(), ValidationFailure> {
    if let Some((field, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationFailure::NonFinite { field: *field });
    }

    if let Some((field, _)) = values
        .iter()
        .find(|(field, v)| positive.contains(field) && *v <= 0.0)
    {
        return Err(ValidationFailure::NonPositive { field: *field });
    }

    Ok(())
}

/// A derived metric that overflows is blamed on the input it was divided by.
fn ensure_finite(field: Field, derived: f64) -> Result<(), ValidationFailure> {
    if derived.is_finite() {
        Ok(())
    } else {
        Err(ValidationFailure::NonFinite { field })
    }
}

/// Time-ordered id; v7 UUIDs generated in one process sort by creation.
fn next_id() -> WorkoutId {
    WorkoutId::new(Uuid::now_v7().to_string())
}
