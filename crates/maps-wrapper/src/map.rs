//! Map collaborator: creates overlays and applies styles on every backend

use crate::backend::Backends;
use crate::options::{CircleOptions, MapProperties, TileOverlayOptions};
use crate::overlay::{
    Circle, CircleBackend, NativeCircle, NativeTileOverlay, TileOverlay, TileOverlayBackend,
};
use crate::style::StyleHandle;
use crate::types::TileSource;
use crate::vendor::{Native, NativeResult, Vendor};
use crate::{MapsError, Result};

/// A live map of vendor `V`
pub trait NativeMap<V: Vendor> {
    type Circle: NativeCircle<V> + 'static;
    type TileOverlay: NativeTileOverlay<V> + 'static;

    fn add_circle(&mut self, options: V::CircleOptions) -> NativeResult<Self::Circle>;
    fn add_tile_overlay(
        &mut self,
        options: V::TileOverlayOptions,
    ) -> NativeResult<Self::TileOverlay>;

    /// Apply `style`, or restore the default style for `None`
    ///
    /// Returns whether the map accepted the style.
    fn set_map_style(&mut self, style: Option<&V::MapStyleOptions>) -> NativeResult<bool>;

    fn set_map_type(&mut self, code: i32) -> NativeResult<()>;
    fn set_buildings_enabled(&mut self, enabled: bool) -> NativeResult<()>;
    fn set_indoor_enabled(&mut self, enabled: bool) -> NativeResult<()>;
    fn set_my_location_enabled(&mut self, enabled: bool) -> NativeResult<()>;
    fn set_traffic_enabled(&mut self, enabled: bool) -> NativeResult<()>;
    /// `None` lifts the constraint
    fn set_lat_lng_bounds_for_camera_target(
        &mut self,
        bounds: Option<V::LatLngBounds>,
    ) -> NativeResult<()>;
    fn set_min_zoom_preference(&mut self, zoom: f32) -> NativeResult<()>;
    fn set_max_zoom_preference(&mut self, zoom: f32) -> NativeResult<()>;
}

/// Vendor-independent view of one native map
pub trait MapBackend {
    fn add_circle(&mut self, options: &CircleOptions) -> NativeResult<Box<dyn CircleBackend>>;

    fn add_tile_overlay(
        &mut self,
        options: &TileOverlayOptions,
    ) -> NativeResult<Box<dyn TileOverlayBackend>>;

    /// Apply this backend's own member of `style`
    fn set_map_style(&mut self, style: &StyleHandle) -> NativeResult<bool>;

    /// Write every property; stops at the first one this backend refuses
    fn set_properties(&mut self, properties: &MapProperties) -> NativeResult<()>;
}

impl<V: Vendor, T: NativeMap<V>> MapBackend for Native<V, T> {
    fn add_circle(&mut self, options: &CircleOptions) -> NativeResult<Box<dyn CircleBackend>> {
        let circle = self.get_mut().add_circle(options.commit::<V>())?;
        Ok(Box::new(Native::<V, _>::new(circle)))
    }

    fn add_tile_overlay(
        &mut self,
        options: &TileOverlayOptions,
    ) -> NativeResult<Box<dyn TileOverlayBackend>> {
        let overlay = self.get_mut().add_tile_overlay(options.commit::<V>())?;
        Ok(Box::new(Native::<V, _>::new(overlay)))
    }

    fn set_map_style(&mut self, style: &StyleHandle) -> NativeResult<bool> {
        self.get_mut().set_map_style(style.native::<V>())
    }

    fn set_properties(&mut self, properties: &MapProperties) -> NativeResult<()> {
        let map = self.get_mut();
        map.set_map_type(properties.map_type.code())?;
        map.set_buildings_enabled(properties.building_enabled)?;
        map.set_indoor_enabled(properties.indoor_enabled)?;
        map.set_my_location_enabled(properties.my_location_enabled)?;
        map.set_traffic_enabled(properties.traffic_enabled)?;
        map.set_lat_lng_bounds_for_camera_target(
            properties.lat_lng_bounds_for_camera_target.map(Into::into),
        )?;
        map.set_min_zoom_preference(properties.min_zoom_preference)?;
        map.set_max_zoom_preference(properties.max_zoom_preference)?;

        let style = properties.map_style.as_ref().and_then(|style| style.native::<V>());
        if !map.set_map_style(style)? {
            tracing::debug!(backend = %V::ID, "map style rejected");
        }
        Ok(())
    }
}

/// A map shown by whichever backends are available
#[derive(Debug)]
pub struct ExtendedMap {
    backends: Backends<Box<dyn MapBackend>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ExtendedMap {
    pub fn new(backends: Backends<Box<dyn MapBackend>>) -> Self {
        Self { backends }
    }

    pub fn backends(&self) -> &Backends<Box<dyn MapBackend>> {
        &self.backends
    }

    /// Add a circle on every backend and bind the results into one [`Circle`]
    ///
    /// All or nothing: if any backend refuses, circles already created on the
    /// others are removed again.
    pub fn add_circle(&mut self, options: &CircleOptions) -> Result<Circle> {
        if self.backends.is_empty() {
            return Err(MapsError::NoBackendAvailable {
                operation: "add_circle",
            });
        }

        let (natives, failures) = self
            .backends
            .map_present("add_circle", |map| map.add_circle(options));
        let mut circle = Circle::new(natives);
        if failures.is_empty() {
            return Ok(circle);
        }

        if let Err(error) = circle.remove() {
            tracing::warn!(%error, "could not roll back partially added circle");
        }
        Err(MapsError::BackendOperationFailed {
            operation: "add_circle",
            failures,
        })
    }

    /// Add a tile overlay on every backend, all or nothing like [`add_circle`](Self::add_circle)
    pub fn add_tile_overlay(&mut self, options: &TileOverlayOptions) -> Result<TileOverlay> {
        if self.backends.is_empty() {
            return Err(MapsError::NoBackendAvailable {
                operation: "add_tile_overlay",
            });
        }

        let (natives, failures) = self
            .backends
            .map_present("add_tile_overlay", |map| map.add_tile_overlay(options));
        let mut overlay = TileOverlay::new(natives, options.clone());
        if failures.is_empty() {
            return Ok(overlay);
        }

        if let Err(error) = overlay.remove() {
            tracing::warn!(%error, "could not roll back partially added tile overlay");
        }
        Err(MapsError::BackendOperationFailed {
            operation: "add_tile_overlay",
            failures,
        })
    }

    /// Swap the provider of `overlay`
    ///
    /// The SDKs cannot change a provider in place, so a replacement overlay
    /// with the same settings is added first and the old one removed after.
    /// If the replacement cannot be added, `overlay` is left untouched.
    pub fn set_tile_provider(
        &mut self,
        overlay: &mut TileOverlay,
        provider: TileSource,
    ) -> Result<()> {
        if overlay.is_removed() {
            return Err(MapsError::Removed {
                entity: "tile overlay",
                operation: "set_tile_provider",
            });
        }

        let options = overlay.options().clone().tile_provider(provider);
        let replacement = self.add_tile_overlay(&options)?;
        if let Err(error) = overlay.remove() {
            tracing::warn!(%error, "replaced tile overlay could not be removed");
        }
        *overlay = replacement;
        Ok(())
    }

    /// Apply `properties` on every backend
    ///
    /// A backend refusing one property keeps the ones written before it; the
    /// other backends are still updated.
    pub fn set_properties(&mut self, properties: &MapProperties) -> Result<()> {
        if self.backends.is_empty() {
            return Err(MapsError::NoBackendAvailable {
                operation: "set_properties",
            });
        }
        self.backends
            .for_each_present("set_properties", |map| map.set_properties(properties))
    }

    /// Apply `style` on every backend
    ///
    /// A backend whose member of the handle is empty is reset to its default
    /// style. Returns `true` only if every backend accepted its style.
    pub fn set_map_style(&mut self, style: &StyleHandle) -> Result<bool> {
        if self.backends.is_empty() {
            return Err(MapsError::NoBackendAvailable {
                operation: "set_map_style",
            });
        }

        let mut accepted = true;
        self.backends.for_each_present("set_map_style", |map| {
            accepted &= map.set_map_style(style)?;
            Ok(())
        })?;
        if !accepted {
            tracing::debug!(source = %style.source(), "map style rejected by a backend");
        }
        Ok(accepted)
    }
}
