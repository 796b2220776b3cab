// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborators owned by the embedding UI.
//!
//! The session controller drives these; it never depends on how they are
//! implemented. Map clicks are routed by the UI to
//! `SessionController::on_map_clicked`.

use crate::error::GeolocationError;
use crate::models::Coords;
use crate::services::render::{ListEntry, MarkerSpec};
use std::future::Future;

/// Interactive map the workouts are drawn on.
pub trait MapSurface {
    /// Center the map on `coords` at `zoom`.
    fn set_view(&mut self, coords: Coords, zoom: u8);

    /// Add a marker and open its popup.
    fn add_marker(&mut self, marker: &MarkerSpec);
}

/// Form, list and notification side of the page.
pub trait SessionView {
    /// Reveal the workout form and focus its first field.
    fn show_form(&mut self);

    /// Hide the form and clear its inputs.
    fn hide_form(&mut self);

    /// Add an entry to the workout list.
    fn render_workout(&mut self, entry: &ListEntry);

    /// Blocking notification to the user.
    fn notify(&mut self, message: &str);

    /// Reload the whole page from scratch.
    fn reload(&mut self);
}

/// One-shot position lookup used to center the map at startup.
pub trait GeolocationSource {
    fn current_position(&self) -> impl Future<Output = Result<Coords, GeolocationError>>;
}
