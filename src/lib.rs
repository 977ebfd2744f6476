//! Shapeview - client-side state core for a shapefile map viewer
//!
//! Shapeview tracks everything the map UI needs between renders:
//! 1. Pending file selection - validated shapefile bundles awaiting upload
//! 2. Layer collection - ordered, independently toggle-visible vector layers
//! 3. Active selection - the at-most-one highlighted feature across all layers
//!
//! # Architecture
//!
//! All mutation flows through a single reducer (`app::update`): one event in,
//! effects out. The remote conversion service, the map widget, and the panels
//! are external collaborators reached through narrow seams (`ConversionService`,
//! `MapWidget`, the view functions).

pub mod app;
pub mod error;
pub mod files;
pub mod geo;
pub mod layers;
pub mod notify;
pub mod selection;
pub mod style;
pub mod upload;

pub mod cli;

pub use error::{Result, ShapeviewError};
