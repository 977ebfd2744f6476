//! Bounding-box computation for the fit-to-bounds viewport.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FeatureCollection;

/// Geographic bounding box in [min_lng, min_lat, max_lng, max_lat] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Compute the bounds of a collection, or `None` when the collection
    /// holds no finite coordinates (the map widget's "invalid bounds" case).
    pub fn of(collection: &FeatureCollection) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for feature in &collection.features {
            extend_from_value(&mut bounds, &feature.geometry.coordinates);
        }
        bounds
    }

    fn extend(&mut self, lng: f64, lat: f64) {
        self.min_lng = self.min_lng.min(lng);
        self.min_lat = self.min_lat.min(lat);
        self.max_lng = self.max_lng.max(lng);
        self.max_lat = self.max_lat.max(lat);
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Walk arbitrarily nested coordinate arrays. A leaf position is an array
/// whose first element is a number ([lng, lat, ...]); anything else is a
/// ring/line/multi nesting level to recurse into.
fn extend_from_value(bounds: &mut Option<Bounds>, value: &Value) {
    let Value::Array(items) = value else {
        return;
    };
    match items.first() {
        Some(Value::Number(_)) => {
            let lng = items.first().and_then(Value::as_f64);
            let lat = items.get(1).and_then(Value::as_f64);
            if let (Some(lng), Some(lat)) = (lng, lat) {
                if lng.is_finite() && lat.is_finite() {
                    match bounds {
                        Some(b) => b.extend(lng, lat),
                        None => {
                            *bounds = Some(Bounds {
                                min_lng: lng,
                                min_lat: lat,
                                max_lng: lng,
                                max_lat: lat,
                            })
                        }
                    }
                }
            }
        }
        _ => {
            for item in items {
                extend_from_value(bounds, item);
            }
        }
    }
}
