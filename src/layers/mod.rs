//! Rendered layer collection
//!
//! Each layer is one geometry+attribute collection with independent
//! visibility and color. Layers have stable identity for the lifetime of
//! the session and are never removed in this core.

mod store;

pub use store::LayerStore;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::FeatureCollection;

/// Opaque, session-unique layer identity.
///
/// Never derived from the layer name: names are ordinal-based and would
/// collide if the store were ever reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(Uuid);

impl LayerId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One rendered vector layer.
///
/// `id`, `color`, and `data` are immutable after creation; only `visible`
/// is toggled, and only through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    id: LayerId,
    name: String,
    color: String,
    data: FeatureCollection,
    visible: bool,
}

impl Layer {
    fn new(name: String, color: String, data: FeatureCollection) -> Self {
        Self {
            id: LayerId::generate(),
            name,
            color,
            data,
            visible: true,
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn data(&self) -> &FeatureCollection {
        &self.data
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
