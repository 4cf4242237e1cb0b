//! Maps Wrapper - One Mapping API Over Interchangeable Vendor Backends
//!
//! Application code manipulates one set of facade entities (overlays, option
//! builders, style handles) and never branches on which mapping SDK is
//! installed. Each facade holds an ordered list of backend-native counterparts,
//! any of which may be absent, forwards every mutating call to all of them and
//! answers value-returning calls from the first one present.
//!
//! # Architecture
//!
//! - **[`types`]**: Domain values (coordinates, bounds, patterns, colors, tags)
//! - **[`vendor`]**: Backend identity and each vendor's native value shapes
//! - **[`convert`]**: Lossless conversion between domain and native values
//! - **[`Backends`]**: Presence list implementing the dispatch policy
//! - **[`Circle`], [`GroundOverlay`], [`Polygon`], [`TileOverlay`]**: Overlay facades
//! - **[`CircleOptions`], [`TileOverlayOptions`], [`ExtendedMapOptions`]**: Canonical option builders
//! - **[`MapProperties`]**: Settings applied to a live map
//! - **[`StyleLoader`]**: Best-effort per-backend style loading
//! - **[`ExtendedMap`]**: Creates overlays from options on every live backend
//!
//! # Degradation
//!
//! A missing backend is a normal condition. A backend that fails during a
//! mutating call does not prevent the call from reaching the others, and the
//! failure is reported once all of them have been called.

pub mod backend;
pub mod convert;
mod map;
pub mod options;
pub mod overlay;
mod style;
pub mod types;
pub mod vendor;

#[cfg(test)]
mod testing;

use std::fmt;

// Public API exports
pub use backend::Backends;
pub use map::{ExtendedMap, MapBackend, NativeMap};
pub use options::{
    AttributeSet, CircleOptions, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ExtendedMapOptions,
    MapProperties, TileOverlayOptions,
};
pub use overlay::{Circle, GroundOverlay, Polygon, TileOverlay};
pub use style::{
    NativeStyleLoader, StyleBackend, StyleHandle, StyleLoadDegraded, StyleLoader, StyleOutcome,
    StyleSource,
};
pub use types::{
    BitmapDescriptor, CameraPosition, Color, CrossesAntimeridian, JointType, LatLng, LatLngBounds,
    MapType, PatternItem, Tag, Tile, TileProvider, TileSource,
};
pub use vendor::{BackendId, Gms, Hms, Native, NativeError, NativeResult, Vendor};

/// A native call that failed on one backend
#[derive(Debug, Clone, PartialEq)]
pub struct BackendFailure {
    pub backend: BackendId,
    pub error: NativeError,
}

impl BackendFailure {
    pub fn new(backend: BackendId, error: NativeError) -> Self {
        Self { backend, error }
    }
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.backend, self.error)
    }
}

fn join_failures(failures: &[BackendFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error types for the facade
#[derive(Debug, thiserror::Error)]
pub enum MapsError {
    #[error("no backend available to answer `{operation}`")]
    NoBackendAvailable { operation: &'static str },

    #[error("`{operation}` failed on {}", join_failures(.failures))]
    BackendOperationFailed {
        operation: &'static str,
        failures: Vec<BackendFailure>,
    },

    #[error("`{operation}` called on a removed {entity}")]
    Removed {
        entity: &'static str,
        operation: &'static str,
    },
}

impl MapsError {
    /// Per-backend failures carried by this error, if any
    pub fn failures(&self) -> &[BackendFailure] {
        match self {
            MapsError::BackendOperationFailed { failures, .. } => failures,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, MapsError>;
