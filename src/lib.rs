// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: log runs and rides by clicking on a map
//!
//! This crate provides the workout model, form validation and the session
//! controller behind a map-based workout log, plus persistence of the
//! workout list to a durable key-value store.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;
pub mod ui;

pub use error::{AppError, Result};
pub use services::SessionController;
