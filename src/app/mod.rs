//! Application state and the single event reducer
//!
//! All UI mutation flows through [`update`]: one event in, state mutated,
//! effects out. Handlers never capture layer collections in closures; every
//! event is resolved against the current state, so nothing acts on a stale
//! snapshot. The whole state is serializable.
//!
//! Everything runs on one logical task. Racing uploads are supported by
//! construction: each delivers its own `UploadFinished`, append order is
//! completion order, and the notification slot is last-write-wins with
//! version-guarded expiry.

mod map;
mod views;

pub use map::{apply_effects, MapWidget};
pub use views::{file_feedback_view, inspector_view, layer_list_view, LayerListEntry};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::files::{FileDescriptor, FileSet};
use crate::geo::{Bounds, Feature};
use crate::layers::{LayerId, LayerStore};
use crate::notify::{NotificationKind, NotificationSlot, AUTO_HIDE_SECONDS};
use crate::selection::{FeatureId, SelectedFeature, Selection};
use crate::upload::{ConversionService, UploadCoordinator, UploadOutcome};

/// Color applied to new layers until the user picks another.
pub const DEFAULT_LAYER_COLOR: &str = "#3388ff";

const LOADING_TEXT: &str = "Uploading shapefile...";
const SUCCESS_TEXT: &str = "Shapefile uploaded";

/// The whole client-side state between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// Validated files awaiting upload.
    pub pending: FileSet,
    /// Ordered collection of rendered layers.
    pub layers: LayerStore,
    /// At-most-one active feature.
    pub selection: Selection,
    /// Single-slot status banner.
    pub notification: NotificationSlot,
    /// Color the next appended layer will get.
    pub current_color: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            pending: FileSet::default(),
            layers: LayerStore::new(),
            selection: Selection::default(),
            notification: NotificationSlot::new(),
            current_color: DEFAULT_LAYER_COLOR.to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Every input the state machine reacts to.
#[derive(Debug, Clone)]
pub enum Event {
    /// The user picked a new set of files; replaces the previous selection.
    FilesSelected(Vec<FileDescriptor>),
    /// The user picked the color for the next layer.
    ColorPicked(String),
    /// The user asked to upload the pending selection.
    UploadRequested,
    /// One upload attempt reached its terminal outcome.
    UploadFinished(UploadOutcome),
    /// The map widget delivered a contained feature click.
    FeatureClicked { layer: LayerId, feature: Feature },
    /// The map widget delivered a background click.
    BackgroundClicked,
    /// The user toggled one layer in the layer list panel.
    LayerVisibilityToggled { layer: LayerId, visible: bool },
    /// A scheduled notification timer fired.
    NotificationExpired { version: u64 },
}

/// Commands the reducer asks the surrounding runtime to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Start the network call for this bundle snapshot.
    StartUpload(FileSet),
    /// Draw a newly appended layer.
    RenderLayer(LayerId),
    /// Move the viewport; emitted exactly once per successful append.
    FitBounds(Bounds),
    /// Re-resolve styles after a selection or visibility change.
    Restyle,
    /// Arrange for `NotificationExpired { version }` at `at`.
    ScheduleNotificationExpiry { version: u64, at: DateTime<Utc> },
}

/// The single update function.
pub fn update(state: &mut AppState, event: Event, now: DateTime<Utc>) -> Vec<Effect> {
    match event {
        Event::FilesSelected(raw) => {
            state.pending = FileSet::classify(raw);
            Vec::new()
        }

        Event::ColorPicked(color) => {
            state.current_color = color;
            Vec::new()
        }

        Event::UploadRequested => {
            if state.pending.is_empty() {
                return Vec::new();
            }
            // Loading state is visible before the await point: the effect
            // carries a snapshot of the bundle, and the banner is already set
            // when the runtime picks it up.
            let version = state
                .notification
                .show(NotificationKind::Loading, LOADING_TEXT, now);
            vec![
                Effect::ScheduleNotificationExpiry {
                    version,
                    at: now + Duration::seconds(AUTO_HIDE_SECONDS),
                },
                Effect::StartUpload(state.pending.clone()),
            ]
        }

        Event::UploadFinished(UploadOutcome::LayerAdded(data)) => {
            let color = state.current_color.clone();
            let layer = state.layers.append(data, &color);
            let id = layer.id();
            let bounds = Bounds::of(layer.data());

            // Success is the only path that clears the pending selection.
            state.pending.clear();

            let version = state
                .notification
                .show(NotificationKind::Success, SUCCESS_TEXT, now);

            let mut effects = vec![Effect::RenderLayer(id)];
            if let Some(bounds) = bounds {
                effects.push(Effect::FitBounds(bounds));
            }
            effects.push(Effect::ScheduleNotificationExpiry {
                version,
                at: now + Duration::seconds(AUTO_HIDE_SECONDS),
            });
            effects
        }

        Event::UploadFinished(UploadOutcome::Failed(reason)) => {
            // Selection preserved so the user can retry without re-choosing.
            let version = state
                .notification
                .show(NotificationKind::Error, reason, now);
            vec![Effect::ScheduleNotificationExpiry {
                version,
                at: now + Duration::seconds(AUTO_HIDE_SECONDS),
            }]
        }

        Event::FeatureClicked { layer, feature } => {
            // Clicks referencing layers this state does not know are stale.
            if !state.layers.contains(layer) {
                return Vec::new();
            }
            let id = FeatureId::from_hint(feature.stable_id());
            state.selection.feature_clicked(
                layer,
                SelectedFeature {
                    id,
                    properties: feature.properties,
                },
            );
            vec![Effect::Restyle]
        }

        Event::BackgroundClicked => {
            if state.selection.is_idle() {
                return Vec::new();
            }
            state.selection.background_clicked();
            vec![Effect::Restyle]
        }

        Event::LayerVisibilityToggled { layer, visible } => {
            if !state.layers.contains(layer) {
                return Vec::new();
            }
            state.layers.set_visibility(layer, visible);
            vec![Effect::Restyle]
        }

        Event::NotificationExpired { version } => {
            state.notification.expire(version);
            Vec::new()
        }
    }
}

/// State plus the conversion service: the event loop driver.
///
/// `run_upload` serializes one attempt end to end; callers that want racing
/// uploads dispatch `UploadRequested` / `UploadFinished` themselves.
#[derive(Debug)]
pub struct App<S: ConversionService> {
    pub state: AppState,
    coordinator: UploadCoordinator<S>,
}

impl<S: ConversionService> App<S> {
    pub fn new(service: S) -> Self {
        Self {
            state: AppState::new(),
            coordinator: UploadCoordinator::new(service),
        }
    }

    /// Feed one event through the reducer at the current wall-clock time.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        update(&mut self.state, event, Utc::now())
    }

    /// One upload attempt: loading notification first, then the service
    /// call, then exactly one terminal event. Returns the combined effects.
    pub async fn run_upload(&mut self) -> Vec<Effect> {
        let mut effects = self.dispatch(Event::UploadRequested);
        let files = effects.iter().find_map(|effect| match effect {
            Effect::StartUpload(files) => Some(files.clone()),
            _ => None,
        });
        let Some(files) = files else {
            return effects;
        };

        let outcome = self.coordinator.run(&files).await;
        effects.extend(self.dispatch(Event::UploadFinished(outcome)));
        effects
    }

    pub fn service(&self) -> &S {
        self.coordinator.service()
    }
}
