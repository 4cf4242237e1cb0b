//! Domain value types shared by every facade
//!
//! These are the only value types callers ever see. Each backend has its own
//! native representation of them (see [`crate::vendor`]); the translation lives
//! in [`crate::convert`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use geo::{Coord, Point, Rect};
use smallvec::{SmallVec, smallvec};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLng> for Coord<f64> {
    fn from(value: LatLng) -> Self {
        Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for LatLng {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(value: Point<f64>) -> Self {
        Self::new(value.y(), value.x())
    }
}

/// A latitude/longitude aligned rectangle given by its two corners
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLngBounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}

impl LatLngBounds {
    pub const fn new(southwest: LatLng, northeast: LatLng) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Whether the bounds cross the antimeridian (west edge east of the east edge)
    pub fn crosses_antimeridian(&self) -> bool {
        self.southwest.longitude > self.northeast.longitude
    }

    /// Check whether a coordinate lies inside the bounds (edges included)
    pub fn contains(&self, point: LatLng) -> bool {
        let lat_ok =
            self.southwest.latitude <= point.latitude && point.latitude <= self.northeast.latitude;
        let lng_ok = if self.crosses_antimeridian() {
            point.longitude >= self.southwest.longitude
                || point.longitude <= self.northeast.longitude
        } else {
            self.southwest.longitude <= point.longitude
                && point.longitude <= self.northeast.longitude
        };
        lat_ok && lng_ok
    }

    /// Geometric center of the bounds, honoring antimeridian crossing
    pub fn center(&self) -> LatLng {
        let latitude = (self.southwest.latitude + self.northeast.latitude) / 2.0;
        let (west, mut east) = (self.southwest.longitude, self.northeast.longitude);
        if west > east {
            east += 360.0;
        }
        let mut longitude = (west + east) / 2.0;
        if longitude > 180.0 {
            longitude -= 360.0;
        }
        LatLng::new(latitude, longitude)
    }

    /// The bounds as planar rects, split in two at the antimeridian if they cross it
    pub fn rects(&self) -> SmallVec<[Rect<f64>; 2]> {
        let (south, north) = (self.southwest.latitude, self.northeast.latitude);
        let rect = |west: f64, east: f64| {
            Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north })
        };
        if self.crosses_antimeridian() {
            smallvec![
                rect(self.southwest.longitude, 180.0),
                rect(-180.0, self.northeast.longitude),
            ]
        } else {
            smallvec![rect(self.southwest.longitude, self.northeast.longitude)]
        }
    }
}

/// Bounds crossing the antimeridian have no single [`Rect`] counterpart
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("bounds from {west} to {east} degrees longitude cross the antimeridian")]
pub struct CrossesAntimeridian {
    pub west: f64,
    pub east: f64,
}

impl TryFrom<LatLngBounds> for Rect<f64> {
    type Error = CrossesAntimeridian;

    fn try_from(value: LatLngBounds) -> Result<Self, Self::Error> {
        if value.crosses_antimeridian() {
            return Err(CrossesAntimeridian {
                west: value.southwest.longitude,
                east: value.northeast.longitude,
            });
        }
        Ok(Rect::new(
            Coord::from(value.southwest),
            Coord::from(value.northeast),
        ))
    }
}

impl From<Rect<f64>> for LatLngBounds {
    fn from(value: Rect<f64>) -> Self {
        Self::new(value.min().into(), value.max().into())
    }
}

/// One element of a stroke pattern
///
/// Lengths are in screen pixels. A pattern is an ordered sequence of items
/// repeated along the stroke; `None` where a pattern is optional means a solid line.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PatternItem {
    Dash(f32),
    Dot,
    Gap(f32),
}

/// A 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

/// How consecutive stroke segments are joined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointType {
    /// Mitered joint (the backends' default)
    #[default]
    Default,
    Bevel,
    Round,
}

impl JointType {
    /// Integer code understood by every backend
    pub const fn code(self) -> i32 {
        match self {
            JointType::Default => 0,
            JointType::Bevel => 1,
            JointType::Round => 2,
        }
    }

    /// Unknown codes fall back to [`JointType::Default`], as the backends do.
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => JointType::Bevel,
            2 => JointType::Round,
            _ => JointType::Default,
        }
    }
}

/// Base map tile style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapType {
    None,
    #[default]
    Normal,
    Satellite,
    Terrain,
    Hybrid,
}

impl MapType {
    pub const fn code(self) -> i32 {
        match self {
            MapType::None => 0,
            MapType::Normal => 1,
            MapType::Satellite => 2,
            MapType::Terrain => 3,
            MapType::Hybrid => 4,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(MapType::None),
            1 => Some(MapType::Normal),
            2 => Some(MapType::Satellite),
            3 => Some(MapType::Terrain),
            4 => Some(MapType::Hybrid),
            _ => None,
        }
    }

    /// Parse the XML attribute spelling (`"satellite"`) or a numeric code
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(MapType::None),
            "normal" => Some(MapType::Normal),
            "satellite" => Some(MapType::Satellite),
            "terrain" => Some(MapType::Terrain),
            "hybrid" => Some(MapType::Hybrid),
            other => other.parse().ok().and_then(Self::from_code),
        }
    }
}

/// Camera placement used when a map is first shown
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CameraPosition {
    pub target: LatLng,
    pub zoom: f32,
    pub tilt: f32,
    pub bearing: f32,
}

impl CameraPosition {
    pub const fn from_lat_lng_zoom(target: LatLng, zoom: f32) -> Self {
        Self {
            target,
            zoom,
            tilt: 0.0,
            bearing: 0.0,
        }
    }
}

/// Reference to an image a backend can rasterize (ground overlays, markers)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BitmapDescriptor {
    /// Packaged drawable resource id
    Resource(u32),
    /// File name inside the application assets
    Asset(String),
    /// Absolute file path
    Path(String),
    /// Default marker image, optionally tinted with a hue in degrees
    DefaultMarker(Option<f32>),
}

/// Opaque caller data attached to an overlay
///
/// Tags are shared, not copied: every backend receives the same value and
/// [`Tag::ptr_eq`] identifies it.
#[derive(Clone)]
pub struct Tag(Rc<dyn Any>);

impl Tag {
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub fn ptr_eq(&self, other: &Tag) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&Rc::as_ptr(&self.0)).finish()
    }
}

/// One raster tile, already encoded (PNG or JPEG)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Serves the images of a tile overlay
pub trait TileProvider {
    /// Tile at `x`/`y` for `zoom`, or `None` where the overlay has no tile
    fn tile(&self, x: u32, y: u32, zoom: u32) -> Option<Tile>;
}

/// A [`TileProvider`] shared by every backend drawing the same overlay
#[derive(Clone)]
pub struct TileSource(Rc<dyn TileProvider>);

impl TileSource {
    pub fn new<T: TileProvider + 'static>(provider: T) -> Self {
        Self(Rc::new(provider))
    }

    pub fn tile(&self, x: u32, y: u32, zoom: u32) -> Option<Tile> {
        self.0.tile(x, y, zoom)
    }

    pub fn ptr_eq(&self, other: &TileSource) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for TileSource {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for TileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TileSource").field(&Rc::as_ptr(&self.0)).finish()
    }
}
