// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

use crate::models::WorkoutId;
use std::fmt;

/// Form field checked by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Distance => "distance",
            Field::Duration => "duration",
            Field::Cadence => "cadence",
            Field::Elevation => "elevation",
        };
        f.write_str(name)
    }
}

/// Why a form submission was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("Inputs have to be finite numbers ({field} is not)")]
    NonFinite { field: Field },

    #[error("Inputs have to be positive numbers ({field} is not)")]
    NonPositive { field: Field },
}

impl ValidationFailure {
    pub fn field(&self) -> Field {
        match self {
            ValidationFailure::NonFinite { field } | ValidationFailure::NonPositive { field } => {
                *field
            }
        }
    }
}

/// Failure reported by a geolocation source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("Permission to read the position was denied")]
    PermissionDenied,

    #[error("Position unavailable: {0}")]
    Unavailable(String),

    #[error("Timed out waiting for a position")]
    Timeout,
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid workout input: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("Geolocation unavailable: {0}")]
    GeolocationUnavailable(#[from] GeolocationError),

    #[error("Malformed persisted data: {0}")]
    MalformedPersistedData(String),

    #[error("Duplicate workout id: {0}")]
    DuplicateId(WorkoutId),

    #[error("Workout not found: {0}")]
    NotFound(WorkoutId),

    #[error("Cannot handle {event} while {state}")]
    InvalidTransition {
        event: &'static str,
        state: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub const POSITION_UNAVAILABLE: &'static str = "Could not get your position";
    pub const RESET_FAILED: &'static str = "Your workouts could not be deleted";

    /// Text shown to the user in a blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(failure) => failure.to_string(),
            AppError::GeolocationUnavailable(_) => Self::POSITION_UNAVAILABLE.to_string(),
            AppError::NotFound(_) => "That workout no longer exists".to_string(),
            AppError::Storage(_) => "Your workouts could not be saved".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the session can keep going after this error.
    ///
    /// Only a duplicate id or an internal failure aborts the operation
    /// without a defined local recovery.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::DuplicateId(_) | AppError::Internal(_))
    }
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, AppError>;
