use crate::types::TileSource;
use crate::vendor::Vendor;

/// A vendor's native tile overlay builder
pub trait NativeTileOverlayOptions<V: Vendor> {
    fn tile_provider(&mut self, provider: TileSource);
    fn fade_in(&mut self, fade_in: bool);
    fn transparency(&mut self, transparency: f32);
    fn visible(&mut self, visible: bool);
    fn z_index(&mut self, z_index: f32);
}

/// Settings for a tile overlay about to be added to a map
#[derive(Debug, Clone, PartialEq)]
pub struct TileOverlayOptions {
    /// Shared by every backend; the overlay draws nothing without one
    pub tile_provider: Option<TileSource>,
    pub fade_in: bool,
    /// `0.0` is opaque, `1.0` fully transparent
    pub transparency: f32,
    pub visible: bool,
    pub z_index: f32,
}

impl Default for TileOverlayOptions {
    fn default() -> Self {
        Self {
            tile_provider: None,
            fade_in: true,
            transparency: 0.0,
            visible: true,
            z_index: 0.0,
        }
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl TileOverlayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tile_provider(mut self, provider: TileSource) -> Self {
        self.tile_provider = Some(provider);
        self
    }

    pub fn fade_in(mut self, fade_in: bool) -> Self {
        self.fade_in = fade_in;
        self
    }

    pub fn transparency(mut self, transparency: f32) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn z_index(mut self, z_index: f32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Build vendor `V`'s native builder; every field is written
    pub fn commit<V: Vendor>(&self) -> V::TileOverlayOptions {
        let mut native = V::TileOverlayOptions::default();
        if let Some(provider) = &self.tile_provider {
            native.tile_provider(provider.clone());
        }
        native.fade_in(self.fade_in);
        native.transparency(self.transparency);
        native.visible(self.visible);
        native.z_index(self.z_index);
        native
    }
}
