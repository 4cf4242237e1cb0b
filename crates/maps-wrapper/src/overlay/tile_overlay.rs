//! Tile overlay: provider-served imagery layered over the base map

use crate::backend::Backends;
use crate::options::TileOverlayOptions;
use crate::vendor::{Native, NativeResult, Vendor};
use crate::Result;

use super::{Bound, TRANSPARENCY_UNKNOWN};

/// A live tile overlay of vendor `V`
pub trait NativeTileOverlay<V: Vendor> {
    fn set_fade_in(&mut self, fade_in: bool) -> NativeResult<()>;
    fn fade_in(&self) -> NativeResult<bool>;
    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()>;
    fn transparency(&self) -> NativeResult<f32>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn clear_tile_cache(&mut self) -> NativeResult<()>;
    fn remove(&mut self) -> NativeResult<()>;
}

/// Vendor-independent view of one native tile overlay
pub trait TileOverlayBackend {
    fn set_fade_in(&mut self, fade_in: bool) -> NativeResult<()>;
    fn fade_in(&self) -> NativeResult<bool>;
    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()>;
    fn transparency(&self) -> NativeResult<f32>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn clear_tile_cache(&mut self) -> NativeResult<()>;
    fn remove(&mut self) -> NativeResult<()>;
}

impl<V: Vendor, T: NativeTileOverlay<V>> TileOverlayBackend for Native<V, T> {
    fn set_fade_in(&mut self, fade_in: bool) -> NativeResult<()> {
        self.get_mut().set_fade_in(fade_in)
    }

    fn fade_in(&self) -> NativeResult<bool> {
        self.get_ref().fade_in()
    }

    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()> {
        self.get_mut().set_transparency(transparency)
    }

    fn transparency(&self) -> NativeResult<f32> {
        self.get_ref().transparency()
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.get_mut().set_visible(visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.get_ref().is_visible()
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.get_mut().set_z_index(z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.get_ref().z_index()
    }

    fn clear_tile_cache(&mut self) -> NativeResult<()> {
        self.get_mut().clear_tile_cache()
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.get_mut().remove()
    }
}

/// A tile layer drawn on every available backend
///
/// Keeps the options it currently stands for, so that
/// [`ExtendedMap::set_tile_provider`](crate::ExtendedMap::set_tile_provider)
/// can re-create it with a new provider and the same settings.
#[derive(Debug)]
pub struct TileOverlay {
    bound: Bound<Box<dyn TileOverlayBackend>>,
    options: TileOverlayOptions,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TileOverlay {
    /// Bind natives that were created from `options`
    pub fn new(
        backends: Backends<Box<dyn TileOverlayBackend>>,
        options: TileOverlayOptions,
    ) -> Self {
        Self {
            bound: Bound::new("tile overlay", backends),
            options,
        }
    }

    pub fn options(&self) -> &TileOverlayOptions {
        &self.options
    }

    pub fn set_fade_in(&mut self, fade_in: bool) -> Result<()> {
        self.remember(|options| options.fade_in = fade_in);
        self.bound
            .update("set_fade_in", |overlay| overlay.set_fade_in(fade_in))
    }

    pub fn fade_in(&self) -> Result<bool> {
        self.bound.get("fade_in", |overlay| overlay.fade_in())
    }

    /// `0.0` is opaque, `1.0` fully transparent
    pub fn set_transparency(&mut self, transparency: f32) -> Result<()> {
        self.remember(|options| options.transparency = transparency);
        self.bound.update("set_transparency", |overlay| {
            overlay.set_transparency(transparency)
        })
    }

    /// [`TRANSPARENCY_UNKNOWN`] when no backend is bound
    pub fn transparency(&self) -> Result<f32> {
        self.bound
            .get_or("transparency", TRANSPARENCY_UNKNOWN, |overlay| {
                overlay.transparency()
            })
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.remember(|options| options.visible = visible);
        self.bound
            .update("set_visible", |overlay| overlay.set_visible(visible))
    }

    pub fn is_visible(&self) -> Result<bool> {
        self.bound.get("is_visible", |overlay| overlay.is_visible())
    }

    pub fn set_z_index(&mut self, z_index: f32) -> Result<()> {
        self.remember(|options| options.z_index = z_index);
        self.bound
            .update("set_z_index", |overlay| overlay.set_z_index(z_index))
    }

    pub fn z_index(&self) -> Result<f32> {
        self.bound.get("z_index", |overlay| overlay.z_index())
    }

    /// Drop cached tiles so the provider is asked again
    pub fn clear_tile_cache(&mut self) -> Result<()> {
        self.bound
            .update("clear_tile_cache", |overlay| overlay.clear_tile_cache())
    }

    pub fn remove(&mut self) -> Result<()> {
        self.bound.remove(|overlay| overlay.remove())
    }

    pub fn is_removed(&self) -> bool {
        self.bound.is_removed()
    }

    pub fn backends(&self) -> &Backends<Box<dyn TileOverlayBackend>> {
        self.bound.backends()
    }

    fn remember(&mut self, change: impl FnOnce(&mut TileOverlayOptions)) {
        if !self.bound.is_removed() {
            change(&mut self.options);
        }
    }
}
