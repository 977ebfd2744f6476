//! Read-only projections of the state for the surrounding panels.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AppState;
use crate::layers::LayerId;

/// One row of the layer list panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerListEntry {
    pub id: LayerId,
    pub name: String,
    pub color: String,
    pub visible: bool,
}

/// The attribute mapping shown in the inspector panel: the active
/// feature's properties, or nothing when idle.
pub fn inspector_view(state: &AppState) -> Option<&Map<String, Value>> {
    let (layer, feature) = state.selection.active()?;
    // Layers are never removed in this core, but the invariant stands:
    // a selection pointing at an unknown layer shows nothing.
    if !state.layers.contains(layer) {
        return None;
    }
    Some(&feature.properties)
}

/// Ordered rows for the layer list panel.
pub fn layer_list_view(state: &AppState) -> Vec<LayerListEntry> {
    state
        .layers
        .iter()
        .map(|layer| LayerListEntry {
            id: layer.id(),
            name: layer.name().to_string(),
            color: layer.color().to_string(),
            visible: layer.visible(),
        })
        .collect()
}

/// File-completeness feedback for the pending selection: the bundle
/// extensions still missing. Empty means upload-ready.
pub fn file_feedback_view(state: &AppState) -> Vec<String> {
    state.pending.missing_extensions()
}
