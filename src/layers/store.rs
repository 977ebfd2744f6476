//! Ordered layer store with stable identity across renders.

use serde::{Deserialize, Serialize};

use super::{Layer, LayerId};
use crate::geo::FeatureCollection;

/// Append-only ordered collection of layers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStore {
    layers: Vec<Layer>,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new layer: fresh id, ordinal default name ("Layer N"),
    /// visible by default. Returns a reference to the stored layer.
    pub fn append(&mut self, data: FeatureCollection, color: &str) -> &Layer {
        let name = format!("Layer {}", self.layers.len() + 1);
        let index = self.layers.len();
        self.layers
            .push(Layer::new(name, color.to_string(), data));
        &self.layers[index]
    }

    /// Toggle visibility of one layer. Silent no-op on unknown ids;
    /// all other layers and fields are untouched.
    pub fn set_visibility(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.id() == id) {
            layer.set_visible(visible);
        }
    }

    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id() == id)
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.get(id).is_some()
    }

    /// The most recently appended layer, used to key fit-to-bounds
    /// recomputation off collection growth.
    pub fn latest(&self) -> Option<&Layer> {
        self.layers.last()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::FeatureCollection;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn store_with(n: usize) -> LayerStore {
        let mut store = LayerStore::new();
        for _ in 0..n {
            store.append(FeatureCollection::new(), "#ff0000");
        }
        store
    }

    #[test]
    fn test_append_assigns_ordinal_names_and_distinct_ids() {
        let store = store_with(3);

        let names: Vec<&str> = store.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Layer 1", "Layer 2", "Layer 3"]);

        let ids: HashSet<LayerId> = store.iter().map(|l| l.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_appended_layer_is_visible_by_default() {
        let mut store = LayerStore::new();
        let layer = store.append(FeatureCollection::new(), "#00ff00");
        assert!(layer.visible());
        assert_eq!(layer.color(), "#00ff00");
    }

    #[test]
    fn test_visibility_toggle_is_isolated() {
        let mut store = store_with(2);
        let first = store.iter().next().map(|l| l.id()).unwrap();
        let second = store.latest().map(|l| l.id()).unwrap();
        let second_before = store.get(second).cloned().unwrap();

        store.set_visibility(first, false);

        assert!(!store.get(first).unwrap().visible());
        assert_eq!(store.get(second), Some(&second_before));
    }

    #[test]
    fn test_set_visibility_on_unknown_id_is_a_no_op() {
        let mut store = store_with(1);
        let before = store.clone();
        store.set_visibility(LayerId::generate(), false);
        assert_eq!(store, before);
    }

    #[test]
    fn test_latest_tracks_append_order() {
        let mut store = LayerStore::new();
        assert!(store.latest().is_none());

        store.append(FeatureCollection::new(), "#ff0000");
        store.append(FeatureCollection::new(), "#0000ff");
        assert_eq!(store.latest().map(|l| l.name()), Some("Layer 2"));
        assert_eq!(store.len(), 2);
    }
}
