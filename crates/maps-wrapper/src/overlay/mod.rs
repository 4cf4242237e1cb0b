//! Overlay facades bound to backend-native overlays
//!
//! Each overlay kind comes in three layers:
//!
//! - a native trait (`NativeCircle<V>`, ...) mirroring one vendor SDK's overlay
//!   object in that vendor's value types;
//! - an object-safe capability trait (`CircleBackend`, ...) in domain types,
//!   implemented for [`Native<V, T>`](crate::Native) by converting arguments and
//!   results;
//! - the facade (`Circle`, ...) holding one capability object per backend.
//!
//! Overlays are bound once, at creation, and live until [`remove`](Circle::remove).

mod circle;
mod ground_overlay;
mod polygon;
mod tile_overlay;

use std::fmt;

pub use circle::{Circle, CircleBackend, NativeCircle};
pub use ground_overlay::{GroundOverlay, GroundOverlayBackend, NativeGroundOverlay};
pub use polygon::{NativePolygon, Polygon, PolygonBackend};
pub use tile_overlay::{NativeTileOverlay, TileOverlay, TileOverlayBackend};

use crate::backend::Backends;
use crate::vendor::NativeResult;
use crate::{MapsError, Result};

/// Reported by stroke width accessors when no backend is bound
pub const STROKE_WIDTH_UNKNOWN: f32 = -1.0;

/// Reported by [`GroundOverlay::transparency`] and [`TileOverlay::transparency`]
/// when no backend is bound
pub const TRANSPARENCY_UNKNOWN: f32 = -1.0;

/// Backends of one overlay plus its removal state
///
/// Once removed, mutations are ignored and reads fail with
/// [`MapsError::Removed`].
pub(crate) struct Bound<B> {
    entity: &'static str,
    backends: Backends<B>,
    removed: bool,
}

impl<B> Bound<B> {
    pub(crate) fn new(entity: &'static str, backends: Backends<B>) -> Self {
        Self {
            entity,
            backends,
            removed: false,
        }
    }

    pub(crate) fn update<F>(&mut self, operation: &'static str, call: F) -> Result<()>
    where
        F: FnMut(&mut B) -> NativeResult<()>,
    {
        if self.removed {
            tracing::debug!(entity = self.entity, operation, "ignoring call on removed overlay");
            return Ok(());
        }
        self.backends.for_each_present(operation, call)
    }

    pub(crate) fn get<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: FnOnce(&B) -> NativeResult<T>,
    {
        self.ensure_live(operation)?;
        self.backends.first_present(operation, call)
    }

    pub(crate) fn get_or<T, F>(&self, operation: &'static str, sentinel: T, call: F) -> Result<T>
    where
        F: FnOnce(&B) -> NativeResult<T>,
    {
        self.ensure_live(operation)?;
        self.backends.first_present_or(operation, sentinel, call)
    }

    /// Forward the removal, then release the native overlays for good
    ///
    /// The overlay counts as removed even if a backend failed to remove its
    /// native object; that failure is still returned.
    pub(crate) fn remove<F>(&mut self, call: F) -> Result<()>
    where
        F: FnMut(&mut B) -> NativeResult<()>,
    {
        if self.removed {
            return Ok(());
        }
        let result = self.backends.for_each_present("remove", call);
        self.backends.clear();
        self.removed = true;
        tracing::debug!(entity = self.entity, ok = result.is_ok(), "overlay removed");
        result
    }

    pub(crate) fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn backends(&self) -> &Backends<B> {
        &self.backends
    }

    fn ensure_live(&self, operation: &'static str) -> Result<()> {
        if self.removed {
            Err(MapsError::Removed {
                entity: self.entity,
                operation,
            })
        } else {
            Ok(())
        }
    }
}

impl<B> fmt::Debug for Bound<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("entity", &self.entity)
            .field("backends", &self.backends)
            .field("removed", &self.removed)
            .finish()
    }
}
