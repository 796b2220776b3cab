// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod factory;
pub mod persistence;
pub mod render;
pub mod session;

pub use factory::{Clock, SystemClock, WorkoutFactory};
pub use persistence::PersistenceAdapter;
pub use render::{list_entry_for, marker_for, ListEntry, MarkerSpec, PopupOptions};
pub use session::{Phase, SessionController, SessionState};
