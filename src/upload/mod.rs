//! Upload coordination and the conversion-service client
//!
//! The remote conversion service is an opaque HTTP endpoint: it accepts a
//! bundle of shapefile members and returns vector geometry+attributes.
//! `ConversionService` is the seam; `HttpConversionService` is the real
//! client and `MockConversionService` the scripted stand-in for tests and
//! offline demos.

mod http;
mod mock;

pub use http::{HttpConversionService, DEFAULT_ENDPOINT, ENDPOINT_ENV_VAR};
pub use mock::MockConversionService;

use std::future::Future;

use crate::error::Result;
use crate::files::FileSet;
use crate::geo::FeatureCollection;

/// The conversion-service capability.
pub trait ConversionService {
    /// Convert one bundle of files into a feature collection. The file
    /// order inside the bundle is the user's selection order.
    fn convert(&self, files: &FileSet) -> impl Future<Output = Result<FeatureCollection>> + Send;
}

/// Terminal outcome of one upload attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// The service returned usable geometry; a layer should be appended.
    LayerAdded(FeatureCollection),
    /// The attempt failed; `reason` is what the status banner shows.
    Failed(String),
}

/// Maps a service invocation to exactly one terminal outcome.
///
/// Errors never escape the asynchronous boundary: transport, application,
/// and malformed-response failures all collapse into `Failed` with their
/// banner text as the reason.
#[derive(Debug)]
pub struct UploadCoordinator<S: ConversionService> {
    service: S,
}

impl<S: ConversionService> UploadCoordinator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Run one upload attempt to completion.
    pub async fn run(&self, files: &FileSet) -> UploadOutcome {
        match self.service.convert(files).await {
            Ok(collection) => UploadOutcome::LayerAdded(collection),
            Err(err) => {
                tracing::warn!(code = err.error_code(), "upload attempt failed: {err}");
                UploadOutcome::Failed(err.notification_text())
            }
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
