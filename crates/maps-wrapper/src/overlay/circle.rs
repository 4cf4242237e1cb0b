//! Circle overlay

use crate::backend::Backends;
use crate::convert::{color_from_native, color_to_native, from_native_pattern, to_native_pattern};
use crate::types::{Color, LatLng, PatternItem, Tag};
use crate::vendor::{Native, NativeResult, Vendor};
use crate::Result;

use super::{Bound, STROKE_WIDTH_UNKNOWN};

/// A live circle of vendor `V`, in that vendor's value types
pub trait NativeCircle<V: Vendor> {
    fn set_center(&mut self, center: V::LatLng) -> NativeResult<()>;
    fn center(&self) -> NativeResult<V::LatLng>;
    fn set_radius(&mut self, radius: f64) -> NativeResult<()>;
    fn radius(&self) -> NativeResult<f64>;
    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()>;
    fn stroke_width(&self) -> NativeResult<f32>;
    fn set_stroke_color(&mut self, color: i32) -> NativeResult<()>;
    fn stroke_color(&self) -> NativeResult<i32>;
    fn set_stroke_pattern(&mut self, pattern: Option<Vec<V::PatternItem>>) -> NativeResult<()>;
    fn stroke_pattern(&self) -> NativeResult<Option<Vec<V::PatternItem>>>;
    fn set_fill_color(&mut self, color: i32) -> NativeResult<()>;
    fn fill_color(&self) -> NativeResult<i32>;
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn remove(&mut self) -> NativeResult<()>;
}

/// Vendor-independent view of one native circle
pub trait CircleBackend {
    fn set_center(&mut self, center: LatLng) -> NativeResult<()>;
    fn center(&self) -> NativeResult<LatLng>;
    fn set_radius(&mut self, radius: f64) -> NativeResult<()>;
    fn radius(&self) -> NativeResult<f64>;
    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()>;
    fn stroke_width(&self) -> NativeResult<f32>;
    fn set_stroke_color(&mut self, color: Color) -> NativeResult<()>;
    fn stroke_color(&self) -> NativeResult<Color>;
    fn set_stroke_pattern(&mut self, pattern: Option<&[PatternItem]>) -> NativeResult<()>;
    fn stroke_pattern(&self) -> NativeResult<Option<Vec<PatternItem>>>;
    fn set_fill_color(&mut self, color: Color) -> NativeResult<()>;
    fn fill_color(&self) -> NativeResult<Color>;
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn remove(&mut self) -> NativeResult<()>;
}

impl<V: Vendor, T: NativeCircle<V>> CircleBackend for Native<V, T> {
    fn set_center(&mut self, center: LatLng) -> NativeResult<()> {
        self.get_mut().set_center(center.into())
    }

    fn center(&self) -> NativeResult<LatLng> {
        self.get_ref().center().map(Into::into)
    }

    fn set_radius(&mut self, radius: f64) -> NativeResult<()> {
        self.get_mut().set_radius(radius)
    }

    fn radius(&self) -> NativeResult<f64> {
        self.get_ref().radius()
    }

    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()> {
        self.get_mut().set_stroke_width(width)
    }

    fn stroke_width(&self) -> NativeResult<f32> {
        self.get_ref().stroke_width()
    }

    fn set_stroke_color(&mut self, color: Color) -> NativeResult<()> {
        self.get_mut().set_stroke_color(color_to_native(color))
    }

    fn stroke_color(&self) -> NativeResult<Color> {
        self.get_ref().stroke_color().map(color_from_native)
    }

    fn set_stroke_pattern(&mut self, pattern: Option<&[PatternItem]>) -> NativeResult<()> {
        self.get_mut()
            .set_stroke_pattern(pattern.map(to_native_pattern::<V>))
    }

    fn stroke_pattern(&self) -> NativeResult<Option<Vec<PatternItem>>> {
        Ok(self.get_ref().stroke_pattern()?.map(from_native_pattern::<V>))
    }

    fn set_fill_color(&mut self, color: Color) -> NativeResult<()> {
        self.get_mut().set_fill_color(color_to_native(color))
    }

    fn fill_color(&self) -> NativeResult<Color> {
        self.get_ref().fill_color().map(color_from_native)
    }

    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()> {
        self.get_mut().set_tag(tag)
    }

    fn tag(&self) -> NativeResult<Option<Tag>> {
        self.get_ref().tag()
    }

    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()> {
        self.get_mut().set_clickable(clickable)
    }

    fn is_clickable(&self) -> NativeResult<bool> {
        self.get_ref().is_clickable()
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

    fn remove(&mut self) -> NativeResult<()> {
        self.get_mut().remove()
    }
}

/// A circle drawn on every available backend
///
/// Usually obtained from [`ExtendedMap::add_circle`](crate::ExtendedMap::add_circle).
#[derive(Debug)]
pub struct Circle {
    bound: Bound<Box<dyn CircleBackend>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Circle {
    pub fn new(backends: Backends<Box<dyn CircleBackend>>) -> Self {
        Self {
            bound: Bound::new("circle", backends),
        }
    }

    pub fn set_center(&mut self, center: LatLng) -> Result<()> {
        self.bound
            .update("set_center", |circle| circle.set_center(center))
    }

    pub fn center(&self) -> Result<LatLng> {
        self.bound.get("center", |circle| circle.center())
    }

    /// Radius in meters
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.bound
            .update("set_radius", |circle| circle.set_radius(radius))
    }

    pub fn radius(&self) -> Result<f64> {
        self.bound.get("radius", |circle| circle.radius())
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<()> {
        self.bound
            .update("set_stroke_width", |circle| circle.set_stroke_width(width))
    }

    /// [`STROKE_WIDTH_UNKNOWN`] when no backend is bound
    pub fn stroke_width(&self) -> Result<f32> {
        self.bound
            .get_or("stroke_width", STROKE_WIDTH_UNKNOWN, |circle| {
                circle.stroke_width()
            })
    }

    pub fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        self.bound
            .update("set_stroke_color", |circle| circle.set_stroke_color(color))
    }

    pub fn stroke_color(&self) -> Result<Color> {
        self.bound.get("stroke_color", |circle| circle.stroke_color())
    }

    /// `None` draws a solid stroke
    pub fn set_stroke_pattern(&mut self, pattern: Option<&[PatternItem]>) -> Result<()> {
        self.bound.update("set_stroke_pattern", |circle| {
            circle.set_stroke_pattern(pattern)
        })
    }

    pub fn stroke_pattern(&self) -> Result<Option<Vec<PatternItem>>> {
        self.bound
            .get("stroke_pattern", |circle| circle.stroke_pattern())
    }

    pub fn set_fill_color(&mut self, color: Color) -> Result<()> {
        self.bound
            .update("set_fill_color", |circle| circle.set_fill_color(color))
    }

    pub fn fill_color(&self) -> Result<Color> {
        self.bound.get("fill_color", |circle| circle.fill_color())
    }

    pub fn set_tag(&mut self, tag: Option<Tag>) -> Result<()> {
        self.bound
            .update("set_tag", |circle| circle.set_tag(tag.clone()))
    }

    pub fn tag(&self) -> Result<Option<Tag>> {
        self.bound.get("tag", |circle| circle.tag())
    }

    pub fn set_clickable(&mut self, clickable: bool) -> Result<()> {
        self.bound
            .update("set_clickable", |circle| circle.set_clickable(clickable))
    }

    pub fn is_clickable(&self) -> Result<bool> {
        self.bound.get("is_clickable", |circle| circle.is_clickable())
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.bound
            .update("set_visible", |circle| circle.set_visible(visible))
    }

    pub fn is_visible(&self) -> Result<bool> {
        self.bound.get("is_visible", |circle| circle.is_visible())
    }

    pub fn set_z_index(&mut self, z_index: f32) -> Result<()> {
        self.bound
            .update("set_z_index", |circle| circle.set_z_index(z_index))
    }

    pub fn z_index(&self) -> Result<f32> {
        self.bound.get("z_index", |circle| circle.z_index())
    }

    /// Remove the circle from every backend; later calls are ignored
    pub fn remove(&mut self) -> Result<()> {
        self.bound.remove(|circle| circle.remove())
    }

    pub fn is_removed(&self) -> bool {
        self.bound.is_removed()
    }

    /// The backend slots this circle is bound to
    pub fn backends(&self) -> &Backends<Box<dyn CircleBackend>> {
        self.bound.backends()
    }
}
