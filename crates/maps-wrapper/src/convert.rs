//! Value converters between domain values and each backend's native values
//!
//! Every conversion here is pure and total. Element conversions are `From`
//! impls, so [`Vendor`] can require them as bounds; sequence conversions are
//! generic functions over any vendor and preserve order and multiplicity.

use crate::types::{BitmapDescriptor, CameraPosition, Color, LatLng, LatLngBounds, PatternItem};
use crate::vendor::{Vendor, gms, hms};

/// Reinterpret an ARGB color as the signed integer the SDKs take
#[inline]
pub fn color_to_native(color: Color) -> i32 {
    color.argb() as i32
}

#[inline]
pub fn color_from_native(color: i32) -> Color {
    Color(color as u32)
}

#[cfg_attr(feature = "profiling", profiling::function)]
pub fn to_native_points<V: Vendor>(points: &[LatLng]) -> Vec<V::LatLng> {
    points.iter().copied().map(Into::into).collect()
}

#[cfg_attr(feature = "profiling", profiling::function)]
pub fn from_native_points<V: Vendor>(points: Vec<V::LatLng>) -> Vec<LatLng> {
    points.into_iter().map(Into::into).collect()
}

/// Convert a ring set (polygon holes), keeping both outer and inner order
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn to_native_rings<V: Vendor>(rings: &[Vec<LatLng>]) -> Vec<Vec<V::LatLng>> {
    rings.iter().map(|ring| to_native_points::<V>(ring)).collect()
}

#[cfg_attr(feature = "profiling", profiling::function)]
pub fn from_native_rings<V: Vendor>(rings: Vec<Vec<V::LatLng>>) -> Vec<Vec<LatLng>> {
    rings.into_iter().map(from_native_points::<V>).collect()
}

pub fn to_native_pattern<V: Vendor>(pattern: &[PatternItem]) -> Vec<V::PatternItem> {
    pattern.iter().copied().map(Into::into).collect()
}

pub fn from_native_pattern<V: Vendor>(pattern: Vec<V::PatternItem>) -> Vec<PatternItem> {
    pattern.into_iter().map(Into::into).collect()
}

// === GMS ===

impl From<LatLng> for gms::LatLng {
    fn from(value: LatLng) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl From<gms::LatLng> for LatLng {
    fn from(value: gms::LatLng) -> Self {
        LatLng::new(value.latitude, value.longitude)
    }
}

impl From<LatLngBounds> for gms::LatLngBounds {
    fn from(value: LatLngBounds) -> Self {
        Self {
            southwest: value.southwest.into(),
            northeast: value.northeast.into(),
        }
    }
}

impl From<gms::LatLngBounds> for LatLngBounds {
    fn from(value: gms::LatLngBounds) -> Self {
        LatLngBounds::new(value.southwest.into(), value.northeast.into())
    }
}

impl From<PatternItem> for gms::PatternItem {
    fn from(value: PatternItem) -> Self {
        match value {
            PatternItem::Dash(length) => Self::Dash { length },
            PatternItem::Dot => Self::Dot,
            PatternItem::Gap(length) => Self::Gap { length },
        }
    }
}

impl From<gms::PatternItem> for PatternItem {
    fn from(value: gms::PatternItem) -> Self {
        match value {
            gms::PatternItem::Dash { length } => PatternItem::Dash(length),
            gms::PatternItem::Dot => PatternItem::Dot,
            gms::PatternItem::Gap { length } => PatternItem::Gap(length),
        }
    }
}

impl From<&BitmapDescriptor> for gms::BitmapDescriptor {
    fn from(value: &BitmapDescriptor) -> Self {
        match value {
            BitmapDescriptor::Resource(id) => Self::Resource(*id),
            BitmapDescriptor::Asset(name) => Self::Asset(name.clone()),
            BitmapDescriptor::Path(path) => Self::Path(path.clone()),
            BitmapDescriptor::DefaultMarker(hue) => Self::DefaultMarker { hue: *hue },
        }
    }
}

impl From<CameraPosition> for gms::CameraPosition {
    fn from(value: CameraPosition) -> Self {
        Self {
            target: value.target.into(),
            zoom: value.zoom,
            tilt: value.tilt,
            bearing: value.bearing,
        }
    }
}

// === HMS ===

impl From<LatLng> for hms::LatLng {
    fn from(value: LatLng) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
        }
    }
}

impl From<hms::LatLng> for LatLng {
    fn from(value: hms::LatLng) -> Self {
        LatLng::new(value.latitude, value.longitude)
    }
}

impl From<LatLngBounds> for hms::LatLngBounds {
    fn from(value: LatLngBounds) -> Self {
        Self {
            southwest: value.southwest.into(),
            northeast: value.northeast.into(),
        }
    }
}

impl From<hms::LatLngBounds> for LatLngBounds {
    fn from(value: hms::LatLngBounds) -> Self {
        LatLngBounds::new(value.southwest.into(), value.northeast.into())
    }
}

impl From<PatternItem> for hms::PatternItem {
    fn from(value: PatternItem) -> Self {
        let (kind, length) = match value {
            PatternItem::Dash(length) => (hms::PatternKind::Dash, length),
            PatternItem::Dot => (hms::PatternKind::Dot, 0.0),
            PatternItem::Gap(length) => (hms::PatternKind::Gap, length),
        };
        Self { kind, length }
    }
}

impl From<hms::PatternItem> for PatternItem {
    fn from(value: hms::PatternItem) -> Self {
        match value.kind {
            hms::PatternKind::Dash => PatternItem::Dash(value.length),
            hms::PatternKind::Dot => PatternItem::Dot,
            hms::PatternKind::Gap => PatternItem::Gap(value.length),
        }
    }
}

impl From<&BitmapDescriptor> for hms::BitmapDescriptor {
    fn from(value: &BitmapDescriptor) -> Self {
        match value {
            BitmapDescriptor::Resource(id) => Self::FromResource(*id),
            BitmapDescriptor::Asset(name) => Self::FromAsset(name.clone()),
            BitmapDescriptor::Path(path) => Self::FromPath(path.clone()),
            BitmapDescriptor::DefaultMarker(hue) => Self::DefaultMarker(*hue),
        }
    }
}

impl From<CameraPosition> for hms::CameraPosition {
    fn from(value: CameraPosition) -> Self {
        Self {
            target: value.target.into(),
            zoom: value.zoom,
            tilt: value.tilt,
            bearing: value.bearing,
        }
    }
}
