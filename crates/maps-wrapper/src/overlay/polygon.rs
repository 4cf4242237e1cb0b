//! Polygon overlay

use geo::Polygon as GeoPolygon;

use crate::backend::Backends;
use crate::convert::{
    color_from_native, color_to_native, from_native_pattern, from_native_points,
    from_native_rings, to_native_pattern, to_native_points, to_native_rings,
};
use crate::types::{Color, JointType, LatLng, PatternItem, Tag};
use crate::vendor::{Native, NativeResult, Vendor};
use crate::{MapsError, Result};

use super::{Bound, STROKE_WIDTH_UNKNOWN};

/// A live polygon of vendor `V`
///
/// Joint types travel as the SDKs' integer codes.
pub trait NativePolygon<V: Vendor> {
    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()>;
    fn stroke_width(&self) -> NativeResult<f32>;
    fn set_stroke_color(&mut self, color: i32) -> NativeResult<()>;
    fn stroke_color(&self) -> NativeResult<i32>;
    fn set_stroke_joint_type(&mut self, joint_type: i32) -> NativeResult<()>;
    fn stroke_joint_type(&self) -> NativeResult<i32>;
    fn set_stroke_pattern(&mut self, pattern: Option<Vec<V::PatternItem>>) -> NativeResult<()>;
    fn stroke_pattern(&self) -> NativeResult<Option<Vec<V::PatternItem>>>;
    fn set_fill_color(&mut self, color: i32) -> NativeResult<()>;
    fn fill_color(&self) -> NativeResult<i32>;
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_points(&mut self, points: Vec<V::LatLng>) -> NativeResult<()>;
    fn points(&self) -> NativeResult<Vec<V::LatLng>>;
    fn set_holes(&mut self, holes: Vec<Vec<V::LatLng>>) -> NativeResult<()>;
    fn holes(&self) -> NativeResult<Vec<Vec<V::LatLng>>>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_geodesic(&mut self, geodesic: bool) -> NativeResult<()>;
    fn is_geodesic(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn remove(&mut self) -> NativeResult<()>;
}

/// Vendor-independent view of one native polygon
pub trait PolygonBackend {
    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()>;
    fn stroke_width(&self) -> NativeResult<f32>;
    fn set_stroke_color(&mut self, color: Color) -> NativeResult<()>;
    fn stroke_color(&self) -> NativeResult<Color>;
    fn set_stroke_joint_type(&mut self, joint_type: JointType) -> NativeResult<()>;
    fn stroke_joint_type(&self) -> NativeResult<JointType>;
    fn set_stroke_pattern(&mut self, pattern: Option<&[PatternItem]>) -> NativeResult<()>;
    fn stroke_pattern(&self) -> NativeResult<Option<Vec<PatternItem>>>;
    fn set_fill_color(&mut self, color: Color) -> NativeResult<()>;
    fn fill_color(&self) -> NativeResult<Color>;
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()>;
    fn tag(&self) -> NativeResult<Option<Tag>>;
    fn set_points(&mut self, points: &[LatLng]) -> NativeResult<()>;
    fn points(&self) -> NativeResult<Vec<LatLng>>;
    fn set_holes(&mut self, holes: &[Vec<LatLng>]) -> NativeResult<()>;
    fn holes(&self) -> NativeResult<Vec<Vec<LatLng>>>;
    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()>;
    fn is_clickable(&self) -> NativeResult<bool>;
    fn set_visible(&mut self, visible: bool) -> NativeResult<()>;
    fn is_visible(&self) -> NativeResult<bool>;
    fn set_geodesic(&mut self, geodesic: bool) -> NativeResult<()>;
    fn is_geodesic(&self) -> NativeResult<bool>;
    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()>;
    fn z_index(&self) -> NativeResult<f32>;
    fn remove(&mut self) -> NativeResult<()>;
}

impl<V: Vendor, T: NativePolygon<V>> PolygonBackend for Native<V, T> {
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

    fn set_stroke_joint_type(&mut self, joint_type: JointType) -> NativeResult<()> {
        self.get_mut().set_stroke_joint_type(joint_type.code())
    }

    fn stroke_joint_type(&self) -> NativeResult<JointType> {
        self.get_ref().stroke_joint_type().map(JointType::from_code)
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

    fn set_points(&mut self, points: &[LatLng]) -> NativeResult<()> {
        self.get_mut().set_points(to_native_points::<V>(points))
    }

    fn points(&self) -> NativeResult<Vec<LatLng>> {
        self.get_ref().points().map(from_native_points::<V>)
    }

    fn set_holes(&mut self, holes: &[Vec<LatLng>]) -> NativeResult<()> {
        self.get_mut().set_holes(to_native_rings::<V>(holes))
    }

    fn holes(&self) -> NativeResult<Vec<Vec<LatLng>>> {
        self.get_ref().holes().map(from_native_rings::<V>)
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

    fn set_geodesic(&mut self, geodesic: bool) -> NativeResult<()> {
        self.get_mut().set_geodesic(geodesic)
    }

    fn is_geodesic(&self) -> NativeResult<bool> {
        self.get_ref().is_geodesic()
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

/// A filled polygon, with optional holes, drawn on every available backend
#[derive(Debug)]
pub struct Polygon {
    bound: Bound<Box<dyn PolygonBackend>>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl Polygon {
    pub fn new(backends: Backends<Box<dyn PolygonBackend>>) -> Self {
        Self {
            bound: Bound::new("polygon", backends),
        }
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<()> {
        self.bound
            .update("set_stroke_width", |polygon| polygon.set_stroke_width(width))
    }

    /// [`STROKE_WIDTH_UNKNOWN`] when no backend is bound
    pub fn stroke_width(&self) -> Result<f32> {
        self.bound
            .get_or("stroke_width", STROKE_WIDTH_UNKNOWN, |polygon| {
                polygon.stroke_width()
            })
    }

    pub fn set_stroke_color(&mut self, color: Color) -> Result<()> {
        self.bound
            .update("set_stroke_color", |polygon| polygon.set_stroke_color(color))
    }

    pub fn stroke_color(&self) -> Result<Color> {
        self.bound.get("stroke_color", |polygon| polygon.stroke_color())
    }

    pub fn set_stroke_joint_type(&mut self, joint_type: JointType) -> Result<()> {
        self.bound.update("set_stroke_joint_type", |polygon| {
            polygon.set_stroke_joint_type(joint_type)
        })
    }

    pub fn stroke_joint_type(&self) -> Result<JointType> {
        self.bound
            .get("stroke_joint_type", |polygon| polygon.stroke_joint_type())
    }

    pub fn set_stroke_pattern(&mut self, pattern: Option<&[PatternItem]>) -> Result<()> {
        self.bound.update("set_stroke_pattern", |polygon| {
            polygon.set_stroke_pattern(pattern)
        })
    }

    pub fn stroke_pattern(&self) -> Result<Option<Vec<PatternItem>>> {
        self.bound
            .get("stroke_pattern", |polygon| polygon.stroke_pattern())
    }

    pub fn set_fill_color(&mut self, color: Color) -> Result<()> {
        self.bound
            .update("set_fill_color", |polygon| polygon.set_fill_color(color))
    }

    pub fn fill_color(&self) -> Result<Color> {
        self.bound.get("fill_color", |polygon| polygon.fill_color())
    }

    pub fn set_tag(&mut self, tag: Option<Tag>) -> Result<()> {
        self.bound
            .update("set_tag", |polygon| polygon.set_tag(tag.clone()))
    }

    pub fn tag(&self) -> Result<Option<Tag>> {
        self.bound.get("tag", |polygon| polygon.tag())
    }

    /// Outline vertices; the ring is closed implicitly
    pub fn set_points(&mut self, points: &[LatLng]) -> Result<()> {
        self.bound
            .update("set_points", |polygon| polygon.set_points(points))
    }

    pub fn points(&self) -> Result<Vec<LatLng>> {
        self.bound.get("points", |polygon| polygon.points())
    }

    /// Replace every hole; each inner ring is one hole
    pub fn set_holes(&mut self, holes: &[Vec<LatLng>]) -> Result<()> {
        self.bound
            .update("set_holes", |polygon| polygon.set_holes(holes))
    }

    pub fn holes(&self) -> Result<Vec<Vec<LatLng>>> {
        self.bound.get("holes", |polygon| polygon.holes())
    }

    /// Set outline and holes from a [`geo::Polygon`] in longitude/latitude order
    ///
    /// Both parts are forwarded even when the first one fails on a backend.
    /// Failures of both parts are reported together under `set_shape`.
    pub fn set_shape(&mut self, shape: &GeoPolygon<f64>) -> Result<()> {
        #[cfg(feature = "profiling")]
        profiling::scope!("polygon::set_shape");
        let points: Vec<LatLng> = shape.exterior().coords().copied().map(Into::into).collect();
        let holes: Vec<Vec<LatLng>> = shape
            .interiors()
            .iter()
            .map(|ring| ring.coords().copied().map(Into::into).collect())
            .collect();

        let outline = self.set_points(&points);
        let inner = self.set_holes(&holes);
        match (outline, inner) {
            (Ok(()), result) | (result, Ok(())) => result,
            (
                Err(MapsError::BackendOperationFailed { mut failures, .. }),
                Err(MapsError::BackendOperationFailed { failures: more, .. }),
            ) => {
                failures.extend(more);
                Err(MapsError::BackendOperationFailed {
                    operation: "set_shape",
                    failures,
                })
            }
            (Err(error), Err(_)) => Err(error),
        }
    }

    pub fn set_clickable(&mut self, clickable: bool) -> Result<()> {
        self.bound
            .update("set_clickable", |polygon| polygon.set_clickable(clickable))
    }

    pub fn is_clickable(&self) -> Result<bool> {
        self.bound.get("is_clickable", |polygon| polygon.is_clickable())
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.bound
            .update("set_visible", |polygon| polygon.set_visible(visible))
    }

    pub fn is_visible(&self) -> Result<bool> {
        self.bound.get("is_visible", |polygon| polygon.is_visible())
    }

    /// Draw edges as great-circle segments
    pub fn set_geodesic(&mut self, geodesic: bool) -> Result<()> {
        self.bound
            .update("set_geodesic", |polygon| polygon.set_geodesic(geodesic))
    }

    pub fn is_geodesic(&self) -> Result<bool> {
        self.bound.get("is_geodesic", |polygon| polygon.is_geodesic())
    }

    pub fn set_z_index(&mut self, z_index: f32) -> Result<()> {
        self.bound
            .update("set_z_index", |polygon| polygon.set_z_index(z_index))
    }

    pub fn z_index(&self) -> Result<f32> {
        self.bound.get("z_index", |polygon| polygon.z_index())
    }

    pub fn remove(&mut self) -> Result<()> {
        self.bound.remove(|polygon| polygon.remove())
    }

    pub fn is_removed(&self) -> bool {
        self.bound.is_removed()
    }

    pub fn backends(&self) -> &Backends<Box<dyn PolygonBackend>> {
        self.bound.backends()
    }
}
