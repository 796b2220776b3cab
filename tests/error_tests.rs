// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use workout_tracker::error::{AppError, Field, GeolocationError, ValidationFailure};
use workout_tracker::models::WorkoutId;

#[test]
fn test_user_messages() {
    let err = AppError::from(ValidationFailure::NonFinite {
        field: Field::Cadence,
    });
    assert_eq!(
        err.user_message(),
        "Inputs have to be finite numbers (cadence is not)"
    );

    let err = AppError::from(GeolocationError::Timeout);
    assert_eq!(err.user_message(), AppError::POSITION_UNAVAILABLE);

    let err = AppError::Storage("quota exceeded".to_string());
    assert_eq!(err.user_message(), "Your workouts could not be saved");
}

#[test]
fn test_recoverable_errors() {
    let recoverable = [
        AppError::from(ValidationFailure::NonPositive {
            field: Field::Distance,
        }),
        AppError::from(GeolocationError::PermissionDenied),
        AppError::MalformedPersistedData("eof".to_string()),
        AppError::NotFound(WorkoutId::new("gone")),
        AppError::InvalidTransition {
            event: "form submit",
            state: "idle",
        },
        AppError::Storage("disk full".to_string()),
    ];
    for err in recoverable {
        assert!(err.is_recoverable(), "{} should be recoverable", err);
    }
}

#[test]
fn test_fatal_errors() {
    assert!(!AppError::DuplicateId(WorkoutId::new("a")).is_recoverable());
    assert!(!AppError::Internal(anyhow::anyhow!("boom")).is_recoverable());
}

#[test]
fn test_invalid_transition_display() {
    let err = AppError::InvalidTransition {
        event: "map click",
        state: "awaiting form input",
    };
    assert_eq!(
        err.to_string(),
        "Cannot handle map click while awaiting form input"
    );
}
