//! Geometry + attribute data model
//!
//! GeoJSON-shaped containers for the vector data returned by the
//! conversion service. The core never interprets ring topology or
//! coordinate reference systems; coordinates stay as raw JSON and are
//! handed through to the map widget. The one geometric operation owned
//! here is bounding-box computation for the fit-to-bounds viewport.

mod bounds;

pub use bounds::Bounds;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn collection_tag() -> String {
    "FeatureCollection".to_string()
}

fn feature_tag() -> String {
    "Feature".to_string()
}

/// A GeoJSON-shaped collection of features.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_tag")]
    pub tag: String,

    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self {
            tag: collection_tag(),
            features: Vec::new(),
        }
    }

    /// Create a collection from a list of features
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self {
            tag: collection_tag(),
            features,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A single geometric record with attributes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_tag")]
    pub tag: String,

    /// Stable feature identifier, when the source provides one.
    /// GeoJSON allows both string and numeric ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    pub geometry: Geometry,

    /// Attribute mapping shown in the inspector panel (key -> value,
    /// insertion order irrelevant).
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl Feature {
    /// Create a feature with attributes and no stable id
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            tag: feature_tag(),
            id: None,
            geometry,
            properties,
        }
    }

    /// Create a feature carrying a stable string id
    pub fn with_id(id: impl Into<String>, geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            tag: feature_tag(),
            id: Some(Value::String(id.into())),
            geometry,
            properties,
        }
    }

    /// The stable identifier as a string, if the feature carries one.
    ///
    /// Numeric ids are stringified; anything else counts as unidentified.
    pub fn stable_id(&self) -> Option<String> {
        match &self.id {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Geometry with coordinates kept as raw JSON.
///
/// Supported types mirror what the conversion service emits: Point,
/// MultiPoint, LineString, MultiLineString, Polygon, MultiPolygon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub tag: String,

    pub coordinates: Value,
}

impl Geometry {
    pub fn new(tag: impl Into<String>, coordinates: Value) -> Self {
        Self {
            tag: tag.into(),
            coordinates,
        }
    }

    /// Convenience constructor for a point geometry
    pub fn point(lng: f64, lat: f64) -> Self {
        Self::new("Point", serde_json::json!([lng, lat]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collection_deserializes_geojson_shape() {
        let raw = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": 7,
                    "geometry": { "type": "Point", "coordinates": [2.35, 48.85] },
                    "properties": { "name": "Paris" }
                }
            ]
        });

        let collection: FeatureCollection = serde_json::from_value(raw).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.features[0].stable_id(), Some("7".to_string()));
        assert_eq!(
            collection.features[0].properties.get("name"),
            Some(&Value::String("Paris".to_string()))
        );
    }

    #[test]
    fn test_missing_properties_defaults_to_empty_map() {
        let raw = serde_json::json!({
            "type": "FeatureCollection",
            "features": [
                { "geometry": { "type": "Point", "coordinates": [0.0, 0.0] } }
            ]
        });

        let collection: FeatureCollection = serde_json::from_value(raw).unwrap();
        assert!(collection.features[0].properties.is_empty());
        assert_eq!(collection.features[0].stable_id(), None);
    }

    #[test]
    fn test_serialized_collection_keeps_type_tags() {
        let collection = FeatureCollection::from_features(vec![Feature::new(
            Geometry::point(1.0, 2.0),
            Map::new(),
        )]);

        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
    }
}
