// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Handles the core workflow:
//! 1. Capture the clicked map location and show the form
//! 2. Validate the submitted form into a workout
//! 3. Append it to the store and push its list entry and marker to the UI
//! 4. Save the full workout list
//!
//! Every transition runs to completion on `&mut self`. Markers for workouts
//! restored before the map exists are queued and drawn once it attaches.

use crate::config::Config;
use crate::db::DurableBackend;
use crate::error::{AppError, GeolocationError, Result};
use crate::models::{Coords, RawFormInput, Workout, WorkoutId};
use crate::services::factory::WorkoutFactory;
use crate::services::persistence::PersistenceAdapter;
use crate::services::render::{list_entry_for, marker_for};
use crate::store::WorkoutStore;
use crate::time_utils::format_utc_rfc3339;
use crate::ui::{GeolocationSource, MapSurface, SessionView};

/// Where the session is in the click-then-submit cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No location picked yet
    Idle,
    /// A location was clicked and the form is open
    AwaitingFormInput { pending: Coords },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingFormInput { .. } => "awaiting form input",
        }
    }
}

/// Mutable state of one session.
pub struct SessionState<M> {
    phase: Phase,
    store: WorkoutStore,
    map: Option<M>,
    queued_markers: Vec<WorkoutId>,
    started: bool,
}

impl<M> SessionState<M> {
    fn new() -> Self {
        Self {
            phase: Phase::Idle,
            store: WorkoutStore::new(),
            map: None,
            queued_markers: Vec::new(),
            started: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    /// Location captured by the last map click, while the form is open.
    pub fn pending_location(&self) -> Option<Coords> {
        match self.phase {
            Phase::AwaitingFormInput { pending } => Some(pending),
            Phase::Idle => None,
        }
    }

    /// Workouts whose markers wait for the map.
    pub fn queued_markers(&self) -> &[WorkoutId] {
        &self.queued_markers
    }

    /// Draw `workout` on the map, or queue it if there is no map yet.
    fn place_marker(&mut self, workout_id: &WorkoutId)
    where
        M: MapSurface,
    {
        let Some(map) = self.map.as_mut() else {
            self.queued_markers.push(workout_id.clone());
            return;
        };
        if let Ok(workout) = self.store.find_by_id(workout_id) {
            map.add_marker(&marker_for(workout));
        }
    }
}

/// Orchestrates factory, store, rendering and persistence for one session.
pub struct SessionController<B, V, M> {
    state: SessionState<M>,
    factory: WorkoutFactory,
    persistence: PersistenceAdapter<B>,
    view: V,
    map_zoom: u8,
}

impl<B, V, M> SessionController<B, V, M>
where
    B: DurableBackend,
    V: SessionView,
    M: MapSurface,
{
    pub fn new(
        config: &Config,
        factory: WorkoutFactory,
        persistence: PersistenceAdapter<B>,
        view: V,
    ) -> Self {
        Self {
            state: SessionState::new(),
            factory,
            persistence,
            view,
            map_zoom: config.map_zoom,
        }
    }

    /// Controller using the wall clock and the configured storage key.
    pub fn from_config(config: &Config, backend: B, view: V) -> Self {
        let persistence = PersistenceAdapter::with_key(backend, config.storage_key.clone());
        Self::new(config, WorkoutFactory::new(), persistence, view)
    }

    pub fn state(&self) -> &SessionState<M> {
        &self.state
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.state.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn persistence(&self) -> &PersistenceAdapter<B> {
        &self.persistence
    }

    /// Restore saved workouts and list them. Returns how many were restored.
    ///
    /// Markers are drawn now if a map is attached, otherwise queued. Only the
    /// first call loads anything; later calls return the current count.
    pub fn start(&mut self) -> usize {
        if self.state.started {
            tracing::debug!(total = self.state.store.len(), "Session already started");
            return self.state.store.len();
        }
        self.state.started = true;

        let workouts = self.persistence.load();
        self.state.store.replace_all(workouts);
        self.state.queued_markers.clear();

        let ids: Vec<WorkoutId> = self.state.store.iter().map(|w| w.id.clone()).collect();
        for workout in self.state.store.iter() {
            self.view.render_workout(&list_entry_for(workout));
        }
        for id in &ids {
            self.state.place_marker(id);
        }

        tracing::info!(
            restored = ids.len(),
            queued = self.state.queued_markers.len(),
            "Session started"
        );
        ids.len()
    }

    /// Wait for the position, then hand it to `on_location_acquired`.
    pub async fn acquire_location<G, F>(&mut self, source: &G, init_map: F) -> Result<()>
    where
        G: GeolocationSource,
        F: FnOnce(Coords) -> M,
    {
        let result = source.current_position().await;
        self.on_location_acquired(result, init_map)
    }

    /// Completion point for the startup position lookup.
    ///
    /// On success the map is built around the position and queued markers are
    /// drawn. On failure the user is told once and the session carries on
    /// without a map; the error is returned after being reported.
    pub fn on_location_acquired<F>(
        &mut self,
        result: std::result::Result<Coords, GeolocationError>,
        init_map: F,
    ) -> Result<()>
    where
        F: FnOnce(Coords) -> M,
    {
        match result {
            Ok(coords) => {
                tracing::info!(lat = coords.lat, lng = coords.lng, "Position acquired");
                self.attach_map(init_map(coords), coords);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Geolocation unavailable, continuing without map");
                let err = AppError::from(e);
                self.view.notify(&err.user_message());
                Err(err)
            }
        }
    }

    /// Attach a ready map centered on `center` and flush queued markers.
    pub fn attach_map(&mut self, mut map: M, center: Coords) {
        map.set_view(center, self.map_zoom);

        let queued = std::mem::take(&mut self.state.queued_markers);
        for id in &queued {
            if let Ok(workout) = self.state.store.find_by_id(id) {
                map.add_marker(&marker_for(workout));
            }
        }
        self.state.map = Some(map);

        tracing::debug!(flushed = queued.len(), "Map attached");
    }

    /// A point on the map was clicked.
    pub fn on_map_clicked(&mut self, location: Coords) -> Result<()> {
        if self.state.phase != Phase::Idle {
            return Err(self.invalid_transition("map click"));
        }

        self.state.phase = Phase::AwaitingFormInput { pending: location };
        self.view.show_form();
        tracing::debug!(lat = location.lat, lng = location.lng, "Location picked");
        Ok(())
    }

    /// The form was submitted for the pending location.
    ///
    /// A rejected form is reported to the user and leaves the form open with
    /// the same location, so it can be corrected and resubmitted.
    pub fn on_form_submitted(&mut self, input: &RawFormInput) -> Result<&Workout> {
        let Phase::AwaitingFormInput { pending } = self.state.phase else {
            return Err(self.invalid_transition("form submit"));
        };

        let workout = match self.factory.create(input.kind, pending, &input.fields) {
            Ok(workout) => workout,
            Err(failure) => {
                tracing::warn!(kind = %input.kind, error = %failure, "Rejected workout input");
                self.view.notify(&failure.to_string());
                return Err(failure.into());
            }
        };

        let id = workout.id.clone();
        let created_at = format_utc_rfc3339(workout.created_at);
        self.state.store.append(workout)?;

        if let Ok(workout) = self.state.store.find_by_id(&id) {
            self.view.render_workout(&list_entry_for(workout));
        }
        self.state.place_marker(&id);

        if let Err(e) = self.persistence.save(&self.state.store) {
            tracing::error!(workout_id = %id, error = %e, "Failed to save workouts");
            self.view.notify(&e.user_message());
        }

        self.state.phase = Phase::Idle;
        self.view.hide_form();

        tracing::info!(
            workout_id = %id,
            kind = %input.kind,
            created_at = %created_at,
            total = self.state.store.len(),
            "Workout created"
        );
        self.state.store.find_by_id(&id)
    }

    /// The form was closed without submitting.
    pub fn on_form_cancelled(&mut self) {
        if self.state.phase == Phase::Idle {
            return;
        }
        self.state.phase = Phase::Idle;
        self.view.hide_form();
        tracing::debug!("Form cancelled");
    }

    /// A workout in the list was clicked: center the map on it.
    pub fn on_workout_selected(&mut self, id: &WorkoutId) -> Result<()> {
        let workout = self.state.store.find_by_id_mut(id)?;
        workout.record_interaction();
        let coords = workout.coords;
        let interactions = workout.interaction_count;

        if let Some(map) = self.state.map.as_mut() {
            map.set_view(coords, self.map_zoom);
        }

        tracing::debug!(workout_id = %id, interactions, "Workout selected");
        Ok(())
    }

    /// Delete every workout, in storage and in memory, and reload the UI.
    ///
    /// If storage cannot be cleared nothing is discarded.
    pub fn on_reset(&mut self) -> Result<()> {
        if let Err(e) = self.persistence.clear() {
            tracing::error!(error = %e, "Failed to clear saved workouts");
            self.view.notify(AppError::RESET_FAILED);
            return Err(e);
        }

        let discarded = self.state.store.len();
        self.state.store.reset();
        self.state.queued_markers.clear();
        self.state.phase = Phase::Idle;
        self.view.reload();

        tracing::info!(discarded, "Session reset");
        Ok(())
    }

    fn invalid_transition(&self, event: &'static str) -> AppError {
        let state = self.state.phase.name();
        tracing::debug!(event, state, "Ignoring event");
        AppError::InvalidTransition { event, state }
    }
}
