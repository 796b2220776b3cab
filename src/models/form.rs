// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw form input as produced by the UI layer.

use crate::models::workout::WorkoutType;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One unparsed form value: either a number or the field's text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce to a number the way an HTML number input reads.
    ///
    /// Blank text is `0.0`. Text that does not parse is NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            RawValue::Number(n) => *n,
            RawValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        RawValue::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        RawValue::Text(text)
    }
}

/// The form's numeric fields, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RawFields {
    pub distance: RawValue,
    pub duration: RawValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<RawValue>,
}

impl RawFields {
    pub fn running(
        distance: impl Into<RawValue>,
        duration: impl Into<RawValue>,
        cadence: impl Into<RawValue>,
    ) -> Self {
        Self {
            distance: distance.into(),
            duration: duration.into(),
            cadence: Some(cadence.into()),
            elevation: None,
        }
    }

    pub fn cycling(
        distance: impl Into<RawValue>,
        duration: impl Into<RawValue>,
        elevation: impl Into<RawValue>,
    ) -> Self {
        Self {
            distance: distance.into(),
            duration: duration.into(),
            cadence: None,
            elevation: Some(elevation.into()),
        }
    }
}

/// A submitted form: the selected workout type plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RawFormInput {
    pub kind: WorkoutType,
    #[serde(flatten)]
    pub fields: RawFields,
}

impl RawFormInput {
    pub fn running(
        distance: impl Into<RawValue>,
        duration: impl Into<RawValue>,
        cadence: impl Into<RawValue>,
    ) -> Self {
        Self {
            kind: WorkoutType::Running,
            fields: RawFields::running(distance, duration, cadence),
        }
    }

    pub fn cycling(
        distance: impl Into<RawValue>,
        duration: impl Into<RawValue>,
        elevation: impl Into<RawValue>,
    ) -> Self {
        Self {
            kind: WorkoutType::Cycling,
            fields: RawFields::cycling(distance, duration, elevation),
        }
    }
}
