//! Ground overlay: an image anchored to the earth's surface

use crate::backend::Backends;
use crate::types::{BitmapDescriptor, LatLng, LatLngBounds, Tag};
use crate::vendor::{Native, NativeResult, Vendor};
use crate::Result;

use super::{Bound, TRANSPARENCY_UNKNOWN};

/// A live ground overlay of vendor `V`
pub trait NativeGroundOverlay<V: Vendor> {
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()>;
    fn transparency(&self) -> NativeResult<f32>;
    fn set_bearing(&mut self, bearing: f32) -> NativeResult<()>;
    fn bearing(&self) -> NativeResult<f32>;
    fn set_position(&mut self, position: V::LatLng) -> NativeResult<()>;
    fn position(&self) -> NativeResult<V::LatLng>;
    fn set_dimensions(&mut self, width: f32) -> NativeResult<()>;
    fn set_dimensions_with_height(&mut self, width: f32, height: f32) -> NativeResult<()>;
    fn width(&self) -> NativeResult<f32>;
    fn height(&self) -> NativeResult<f32>;
    fn set_position_from_bounds(&mut self, bounds: V::LatLngBounds) -> NativeResult<()>;
    fn bounds(&self) -> NativeResult<V::LatLngBounds>;
    fn set_image(&mut self, image: V::BitmapDescriptor) -> NativeResult<()>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn remove(&mut self) -> NativeResult<()>;
}

/// Vendor-independent view of one native ground overlay
pub trait GroundOverlayBackend {
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()>;
    fn transparency(&self) -> NativeResult<f32>;
    fn set_bearing(&mut self, bearing: f32) -> NativeResult<()>;
    fn bearing(&self) -> NativeResult<f32>;
    fn set_position(&mut self, position: LatLng) -> NativeResult<()>;
    fn position(&self) -> NativeResult<LatLng>;
    fn set_dimensions(&mut self, width: f32) -> NativeResult<()>;
    fn set_dimensions_with_height(&mut self, width: f32, height: f32) -> NativeResult<()>;
    fn width(&self) -> NativeResult<f32>;
    fn height(&self) -> NativeResult<f32>;
    fn set_position_from_bounds(&mut self, bounds: LatLngBounds) -> NativeResult<()>;
    fn bounds(&self) -> NativeResult<LatLngBounds>;
    fn set_image(&mut self, image: &BitmapDescriptor) -> NativeResult<()>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn remove(&mut self) -> NativeResult<()>;
}

impl<V: Vendor, T: NativeGroundOverlay<V>> GroundOverlayBackend for Native<V, T> {
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()> {
        self.get_mut().set_tag(tag)
    }

    fn tag(&self) -> NativeResult<Option<Tag>> {
        self.get_ref().tag()
    }

    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()> {
        self.get_mut().set_transparency(transparency)
    }

    fn transparency(&self) -> NativeResult<f32> {
        self.get_ref().transparency()
    }

    fn set_bearing(&mut self, bearing: f32) -> NativeResult<()> {
        self.get_mut().set_bearing(bearing)
    }

    fn bearing(&self) -> NativeResult<f32> {
        self.get_ref().bearing()
    }

    fn set_position(&mut self, position: LatLng) -> NativeResult<()> {
        self.get_mut().set_position(position.into())
    }

    fn position(&self) -> NativeResult<LatLng> {
        self.get_ref().position().map(Into::into)
    }

    fn set_dimensions(&mut self, width: f32) -> NativeResult<()> {
        self.get_mut().set_dimensions(width)
    }

    fn set_dimensions_with_height(&mut self, width: f32, height: f32) -> NativeResult<()> {
        self.get_mut().set_dimensions_with_height(width, height)
    }

    fn width(&self) -> NativeResult<f32> {
        self.get_ref().width()
    }

    fn height(&self) -> NativeResult<f32> {
        self.get_ref().height()
    }

    fn set_position_from_bounds(&mut self, bounds: LatLngBounds) -> NativeResult<()> {
        self.get_mut().set_position_from_bounds(bounds.into())
    }

    fn bounds(&self) -> NativeResult<LatLngBounds> {
        self.get_ref().bounds().map(Into::into)
    }

    fn set_image(&mut self, image: &BitmapDescriptor) -> NativeResult<()> {
        self.get_mut().set_image(image.into())
    }

    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()> {
        self.get_mut().set_clickable(clickable)
    }

    fn is_clickable(&self) -> NativeResult<bool> {
        self.get_ref().is_clickable()
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.get_mut().set_z_index(z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.get_ref().z_index()
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.get_mut().set_visible(visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.get_ref().is_visible()
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.get_mut().remove()
    }
}

/// An image overlay anchored on every available backend
#[derive(Debug)]
pub struct GroundOverlay {
    bound: Bound<Box<dyn GroundOverlayBackend>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl GroundOverlay {
    pub fn new(backends: Backends<Box<dyn GroundOverlayBackend>>) -> Self {
        Self {
            bound: Bound::new("ground overlay", backends),
        }
    }

    pub fn set_tag(&mut self, tag: Option<Tag>) -> Result<()> {
        self.bound
            .update("set_tag", |overlay| overlay.set_tag(tag.clone()))
    }

    pub fn tag(&self) -> Result<Option<Tag>> {
        self.bound.get("tag", |overlay| overlay.tag())
    }

    /// `0.0` is opaque, `1.0` fully transparent
    pub fn set_transparency(&mut self, transparency: f32) -> Result<()> {
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

    /// Degrees clockwise from north
    pub fn set_bearing(&mut self, bearing: f32) -> Result<()> {
        self.bound
            .update("set_bearing", |overlay| overlay.set_bearing(bearing))
    }

    pub fn bearing(&self) -> Result<f32> {
        self.bound.get("bearing", |overlay| overlay.bearing())
    }

    pub fn set_position(&mut self, position: LatLng) -> Result<()> {
        self.bound
            .update("set_position", |overlay| overlay.set_position(position))
    }

    pub fn position(&self) -> Result<LatLng> {
        self.bound.get("position", |overlay| overlay.position())
    }

    /// Width in meters; the height follows the image's aspect ratio
    pub fn set_dimensions(&mut self, width: f32) -> Result<()> {
        self.bound
            .update("set_dimensions", |overlay| overlay.set_dimensions(width))
    }

    pub fn set_dimensions_with_height(&mut self, width: f32, height: f32) -> Result<()> {
        self.bound.update("set_dimensions_with_height", |overlay| {
            overlay.set_dimensions_with_height(width, height)
        })
    }

    pub fn width(&self) -> Result<f32> {
        self.bound.get("width", |overlay| overlay.width())
    }

    pub fn height(&self) -> Result<f32> {
        self.bound.get("height", |overlay| overlay.height())
    }

    pub fn set_position_from_bounds(&mut self, bounds: LatLngBounds) -> Result<()> {
        self.bound.update("set_position_from_bounds", |overlay| {
            overlay.set_position_from_bounds(bounds)
        })
    }

    pub fn bounds(&self) -> Result<LatLngBounds> {
        self.bound.get("bounds", |overlay| overlay.bounds())
    }

    pub fn set_image(&mut self, image: &BitmapDescriptor) -> Result<()> {
        self.bound
            .update("set_image", |overlay| overlay.set_image(image))
    }

    pub fn set_clickable(&mut self, clickable: bool) -> Result<()> {
        self.bound
            .update("set_clickable", |overlay| overlay.set_clickable(clickable))
    }

    pub fn is_clickable(&self) -> Result<bool> {
        self.bound.get("is_clickable", |overlay| overlay.is_clickable())
    }

    pub fn set_z_index(&mut self, z_index: f32) -> Result<()> {
        self.bound
            .update("set_z_index", |overlay| overlay.set_z_index(z_index))
    }

    pub fn z_index(&self) -> Result<f32> {
        self.bound.get("z_index", |overlay| overlay.z_index())
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.bound
            .update("set_visible", |overlay| overlay.set_visible(visible))
    }

    pub fn is_visible(&self) -> Result<bool> {
        self.bound.get("is_visible", |overlay| overlay.is_visible())
    }

    pub fn remove(&mut self) -> Result<()> {
        self.bound.remove(|overlay| overlay.remove())
    }

    pub fn is_removed(&self) -> bool {
        self.bound.is_removed()
    }

    pub fn backends(&self) -> &Backends<Box<dyn GroundOverlayBackend>> {
        self.bound.backends()
    }
}
