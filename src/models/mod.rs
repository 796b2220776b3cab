// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod form;
pub mod workout;

pub use form::{RawFields, RawFormInput, RawValue};
pub use workout::{Coords, Workout, WorkoutId, WorkoutMetrics, WorkoutType};
