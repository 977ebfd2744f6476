//! Map-widget capability and the effect applier.

use super::{AppState, Effect};
use crate::geo::{Bounds, Feature};
use crate::layers::Layer;
use crate::style::{self, Style};

/// The map-rendering capability consumed by the core.
///
/// Event containment contract: when the user clicks a feature, the widget
/// must deliver `Event::FeatureClicked` only. Delivering the underlying
/// background click for the same interaction would immediately clear the
/// selection the feature click just set; containment is a hard correctness
/// requirement, not cosmetic.
pub trait MapWidget {
    /// Draw (or redraw) one layer, resolving each feature's style through
    /// the callback.
    fn render_layer(&mut self, layer: &Layer, style: &dyn Fn(&Feature) -> Style);

    /// Move the viewport to the given bounds.
    fn fit_to(&mut self, bounds: Bounds);
}

/// Translate reducer effects into widget calls.
///
/// Upload and timer effects are the runtime's concern and are skipped here.
pub fn apply_effects<W: MapWidget>(state: &AppState, effects: &[Effect], widget: &mut W) {
    for effect in effects {
        match effect {
            Effect::RenderLayer(id) => {
                if let Some(layer) = state.layers.get(*id) {
                    render_one(state, layer, widget);
                }
            }
            Effect::FitBounds(bounds) => widget.fit_to(*bounds),
            Effect::Restyle => {
                for layer in state.layers.iter().filter(|l| l.visible()) {
                    render_one(state, layer, widget);
                }
            }
            Effect::StartUpload(_) | Effect::ScheduleNotificationExpiry { .. } => {}
        }
    }
}

fn render_one<W: MapWidget>(state: &AppState, layer: &Layer, widget: &mut W) {
    let layer_id = layer.id();
    let selection = &state.selection;
    let color = layer.color().to_string();
    let resolve = move |feature: &Feature| {
        let active = selection.is_active_feature(layer_id, feature.stable_id().as_deref());
        style::resolve(&color, active)
    };
    widget.render_layer(layer, &resolve);
}
