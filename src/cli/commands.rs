//! CLI Command Implementations

use std::path::PathBuf;

use log::info;

use crate::app::{file_feedback_view, layer_list_view, App, Event};
use crate::error::{Result, ShapeviewError};
use crate::files::FileDescriptor;
use crate::geo::Bounds;
use crate::upload::HttpConversionService;

/// Classify a selection and report completeness.
pub fn classify(paths: &[PathBuf]) -> Result<()> {
    let descriptors = read_descriptors(paths)?;
    let total = descriptors.len();
    let set = crate::files::FileSet::classify(descriptors);

    println!("Relevant files ({} of {} selected):", set.len(), total);
    for file in set.files() {
        println!("  {} ({} bytes)", file.name, file.size);
    }

    let missing = set.missing_extensions();
    if missing.is_empty() {
        println!("Bundle complete: ready to upload");
    } else {
        // Feedback only; an incomplete selection is not an error here.
        println!("Missing: {}", missing.join(", "));
    }

    Ok(())
}

/// Upload one bundle and print the resulting layer.
pub async fn upload(paths: &[PathBuf], color: &str, endpoint: Option<&str>) -> Result<()> {
    let descriptors = read_descriptors(paths)?;

    let service = match endpoint {
        Some(url) => HttpConversionService::with_endpoint(url),
        None => HttpConversionService::new(),
    };
    info!("Uploading to {}", service.endpoint());

    let mut app = App::new(service);
    app.dispatch(Event::FilesSelected(descriptors));
    app.dispatch(Event::ColorPicked(color.to_string()));

    let missing = file_feedback_view(&app.state);
    if !missing.is_empty() {
        return Err(ShapeviewError::MissingFiles { missing });
    }

    app.run_upload().await;

    match app.state.notification.current() {
        Some(banner) => println!("{}", banner.text),
        None => println!("No response"),
    }

    if let Some(layer) = app.state.layers.latest() {
        for entry in layer_list_view(&app.state) {
            println!(
                "{} [{}] visible={} features={}",
                entry.name,
                entry.color,
                entry.visible,
                app.state
                    .layers
                    .get(entry.id)
                    .map(|l| l.data().len())
                    .unwrap_or(0)
            );
        }
        if let Some(bounds) = Bounds::of(layer.data()) {
            println!(
                "Bounds: [{}, {}] - [{}, {}]",
                bounds.min_lng, bounds.min_lat, bounds.max_lng, bounds.max_lat
            );
        }
    }

    Ok(())
}

fn read_descriptors(paths: &[PathBuf]) -> Result<Vec<FileDescriptor>> {
    paths.iter().map(|p| FileDescriptor::from_path(p)).collect()
}
