//! Active-selection state machine
//!
//! At most one feature is highlighted across the whole layer collection.
//! A feature click always lands in `Active` (same-layer clicks replace the
//! feature, cross-layer clicks switch owner with no intermediate `Idle`);
//! a background click returns to `Idle`.
//!
//! Event containment is the collaborating map widget's obligation: a click
//! on a feature must not also be delivered as a background click, or the
//! selection it just set would be cleared in the same interaction. See
//! [`crate::app::MapWidget`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::layers::LayerId;

/// Identity of a clicked feature.
///
/// Uses the stable id when the feature carries one; otherwise a random
/// token is synthesized per click. Two unidentified features colliding is
/// a cosmetic mis-highlight, never data corruption.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn from_hint(hint: Option<String>) -> Self {
        match hint {
            Some(id) => Self(id),
            None => Self(Uuid::new_v4().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Snapshot of the clicked feature carried into the selection.
///
/// Holding the attribute map here (rather than a reference into the layer
/// data) is what keeps the inspector free of dangling references across
/// renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFeature {
    pub id: FeatureId,
    pub properties: Map<String, Value>,
}

/// The at-most-one-active-feature model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Idle,
    Active {
        layer: LayerId,
        feature: SelectedFeature,
    },
}

impl Selection {
    /// Transition for a feature click. Always ends `Active` on the clicked
    /// feature, whatever the previous state.
    pub fn feature_clicked(&mut self, layer: LayerId, feature: SelectedFeature) {
        *self = Selection::Active { layer, feature };
    }

    /// Transition for a map background click. `Idle` stays `Idle`.
    pub fn background_clicked(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The owning layer and selected feature, when active.
    pub fn active(&self) -> Option<(LayerId, &SelectedFeature)> {
        match self {
            Selection::Idle => None,
            Selection::Active { layer, feature } => Some((*layer, feature)),
        }
    }

    /// Whether the given feature of the given layer is the active one.
    /// Drives the style resolver's active flag during restyling.
    pub fn is_active_feature(&self, layer: LayerId, stable_id: Option<&str>) -> bool {
        match self {
            Selection::Active {
                layer: active_layer,
                feature,
            } => *active_layer == layer && stable_id == Some(feature.id.as_str()),
            Selection::Idle => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feature(id: &str) -> SelectedFeature {
        SelectedFeature {
            id: FeatureId::from_hint(Some(id.to_string())),
            properties: Map::new(),
        }
    }

    #[test]
    fn test_click_sequence_never_shows_stale_feature() {
        let l1 = LayerId::generate();
        let l2 = LayerId::generate();
        let mut selection = Selection::default();
        assert!(selection.is_idle());

        selection.feature_clicked(l1, feature("f1"));
        assert_eq!(
            selection.active().map(|(l, f)| (l, f.id.as_str())),
            Some((l1, "f1"))
        );

        // Cross-layer switch: no intermediate Idle, f1 never shown again.
        selection.feature_clicked(l2, feature("f2"));
        assert_eq!(
            selection.active().map(|(l, f)| (l, f.id.as_str())),
            Some((l2, "f2"))
        );

        selection.background_clicked();
        assert!(selection.is_idle());
    }

    #[test]
    fn test_same_layer_click_replaces_feature() {
        let layer = LayerId::generate();
        let mut selection = Selection::default();

        selection.feature_clicked(layer, feature("a"));
        selection.feature_clicked(layer, feature("b"));

        assert!(selection.is_active_feature(layer, Some("b")));
        assert!(!selection.is_active_feature(layer, Some("a")));
    }

    #[test]
    fn test_background_click_while_idle_is_a_no_op() {
        let mut selection = Selection::default();
        selection.background_clicked();
        assert!(selection.is_idle());
    }

    #[test]
    fn test_unidentified_features_get_distinct_tokens() {
        let a = FeatureId::from_hint(None);
        let b = FeatureId::from_hint(None);
        assert_ne!(a, b);
    }

    #[test]
    fn test_active_flag_requires_matching_layer() {
        let l1 = LayerId::generate();
        let l2 = LayerId::generate();
        let mut selection = Selection::default();
        selection.feature_clicked(l1, feature("f"));

        assert!(selection.is_active_feature(l1, Some("f")));
        assert!(!selection.is_active_feature(l2, Some("f")));
        assert!(!selection.is_active_feature(l1, None));
    }
}
