// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use workout_tracker::config::Config;
use workout_tracker::db::MemoryBackend;
use workout_tracker::error::GeolocationError;
use workout_tracker::models::Coords;
use workout_tracker::services::{
    ListEntry, MarkerSpec, PersistenceAdapter, SessionController, WorkoutFactory,
};
use workout_tracker::ui::{GeolocationSource, MapSurface, SessionView};

#[allow(dead_code)]
pub type TestController = SessionController<MemoryBackend, RecordingView, RecordingMap>;

/// Timestamp every test workout is created at.
#[allow(dead_code)]
pub fn april_14() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 14, 9, 30, 0).unwrap()
}

#[allow(dead_code)]
pub fn london() -> Coords {
    Coords::new(51.5, -0.1)
}

/// Controller over `backend` with a fixed clock and recording fakes.
#[allow(dead_code)]
pub fn test_controller(backend: MemoryBackend) -> TestController {
    let config = Config::default();
    let factory = WorkoutFactory::with_clock(april_14);
    SessionController::new(
        &config,
        factory,
        PersistenceAdapter::new(backend),
        RecordingView::default(),
    )
}

/// Records everything the controller asks the page to do.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingView {
    pub form_visible: bool,
    pub form_hides: usize,
    pub entries: Vec<ListEntry>,
    pub notifications: Vec<String>,
    pub reloads: usize,
}

impl SessionView for RecordingView {
    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
        self.form_hides += 1;
    }

    fn render_workout(&mut self, entry: &ListEntry) {
        self.entries.push(entry.clone());
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn reload(&mut self) {
        self.entries.clear();
        self.reloads += 1;
    }
}

/// Records views and markers requested on the map.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub views: Vec<(Coords, u8)>,
    pub markers: Vec<MarkerSpec>,
}

impl MapSurface for RecordingMap {
    fn set_view(&mut self, coords: Coords, zoom: u8) {
        self.views.push((coords, zoom));
    }

    fn add_marker(&mut self, marker: &MarkerSpec) {
        self.markers.push(marker.clone());
    }
}

/// Geolocation source answering with a fixed result.
#[allow(dead_code)]
pub struct FixedGeolocation(pub Result<Coords, GeolocationError>);

impl GeolocationSource for FixedGeolocation {
    async fn current_position(&self) -> Result<Coords, GeolocationError> {
        self.0.clone()
    }
}
