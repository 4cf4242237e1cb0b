use std::collections::BTreeMap;
use std::str::FromStr;

use crate::convert::color_to_native;
use crate::types::{CameraPosition, Color, LatLng, LatLngBounds, MapType};
use crate::vendor::Vendor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vendor's native map view options
pub trait NativeMapOptions<V: Vendor> {
    fn map_type(&mut self, code: i32);
    fn camera(&mut self, camera: V::CameraPosition);
    fn compass_enabled(&mut self, enabled: bool);
    fn rotate_gestures_enabled(&mut self, enabled: bool);
    fn scroll_gestures_enabled(&mut self, enabled: bool);
    fn tilt_gestures_enabled(&mut self, enabled: bool);
    fn zoom_controls_enabled(&mut self, enabled: bool);
    fn zoom_gestures_enabled(&mut self, enabled: bool);
    fn map_toolbar_enabled(&mut self, enabled: bool);
    fn lite_mode(&mut self, enabled: bool);
    fn z_order_on_top(&mut self, on_top: bool);
    fn use_view_lifecycle_in_fragment(&mut self, enabled: bool);
    fn ambient_enabled(&mut self, enabled: bool);
    fn min_zoom_preference(&mut self, zoom: f32);
    fn max_zoom_preference(&mut self, zoom: f32);
    fn lat_lng_bounds_for_camera_target(&mut self, bounds: V::LatLngBounds);
    fn background_color(&mut self, color: i32);
}

/// Raw map view attributes, as declared in a layout
///
/// Keys may carry a namespace prefix (`map:uiCompass`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    values: BTreeMap<String, String>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let name = match key.split_once(':') {
            Some((_, name)) => name.to_string(),
            None => key,
        };
        self.values.insert(name, value.into());
    }

    /// Value of `name`, ignoring any namespace prefix it was declared with
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse `name`, skipping it with a warning when malformed
    fn parse<T>(&self, name: &'static str, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let raw = self.get(name)?;
        let parsed = parse(raw.trim());
        if parsed.is_none() {
            tracing::warn!(attribute = name, value = raw, "ignoring malformed map attribute");
        }
        parsed
    }

    fn number<T: FromStr>(&self, name: &'static str) -> Option<T> {
        self.parse(name, |raw| raw.parse().ok())
    }

    fn flag(&self, name: &'static str) -> Option<bool> {
        self.parse(name, |raw| match raw {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

/// Parse `#RRGGBB`, `#AARRGGBB` or a decimal integer
fn parse_color(raw: &str) -> Option<Color> {
    match raw.strip_prefix('#') {
        // Hex digits only, no sign
        Some(hex) if !hex.bytes().all(|b| b.is_ascii_hexdigit()) => None,
        Some(hex) if hex.len() == 6 => u32::from_str_radix(hex, 16)
            .ok()
            .map(|rgb| Color(0xFF00_0000 | rgb)),
        Some(hex) if hex.len() == 8 => u32::from_str_radix(hex, 16).ok().map(Color),
        Some(_) => None,
        // Layout inflaters hand colors over as signed ints
        None => {
            let value = raw.parse::<i64>().ok()?;
            u32::try_from(value)
                .ok()
                .or_else(|| i32::try_from(value).ok().map(|signed| signed as u32))
                .map(Color)
        }
    }
}

/// Settings for a map view about to be created
///
/// Unset fields leave each backend at its own default.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtendedMapOptions {
    pub map_type: Option<MapType>,
    pub camera: Option<CameraPosition>,
    pub compass_enabled: Option<bool>,
    pub rotate_gestures_enabled: Option<bool>,
    pub scroll_gestures_enabled: Option<bool>,
    pub tilt_gestures_enabled: Option<bool>,
    pub zoom_controls_enabled: Option<bool>,
    pub zoom_gestures_enabled: Option<bool>,
    pub map_toolbar_enabled: Option<bool>,
    pub lite_mode: Option<bool>,
    pub z_order_on_top: Option<bool>,
    pub use_view_lifecycle_in_fragment: Option<bool>,
    pub ambient_enabled: Option<bool>,
    pub min_zoom_preference: Option<f32>,
    pub max_zoom_preference: Option<f32>,
    /// Region the camera target is constrained to
    pub lat_lng_bounds_for_camera_target: Option<LatLngBounds>,
    pub background_color: Option<Color>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl ExtendedMapOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_type(mut self, map_type: MapType) -> Self {
        self.map_type = Some(map_type);
        self
    }

    pub fn camera(mut self, camera: CameraPosition) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn compass_enabled(mut self, enabled: bool) -> Self {
        self.compass_enabled = Some(enabled);
        self
    }

    pub fn rotate_gestures_enabled(mut self, enabled: bool) -> Self {
        self.rotate_gestures_enabled = Some(enabled);
        self
    }

    pub fn scroll_gestures_enabled(mut self, enabled: bool) -> Self {
        self.scroll_gestures_enabled = Some(enabled);
        self
    }

    pub fn tilt_gestures_enabled(mut self, enabled: bool) -> Self {
        self.tilt_gestures_enabled = Some(enabled);
        self
    }

    pub fn zoom_controls_enabled(mut self, enabled: bool) -> Self {
        self.zoom_controls_enabled = Some(enabled);
        self
    }

    pub fn zoom_gestures_enabled(mut self, enabled: bool) -> Self {
        self.zoom_gestures_enabled = Some(enabled);
        self
    }

    pub fn map_toolbar_enabled(mut self, enabled: bool) -> Self {
        self.map_toolbar_enabled = Some(enabled);
        self
    }

    pub fn lite_mode(mut self, enabled: bool) -> Self {
        self.lite_mode = Some(enabled);
        self
    }

    pub fn z_order_on_top(mut self, on_top: bool) -> Self {
        self.z_order_on_top = Some(on_top);
        self
    }

    pub fn use_view_lifecycle_in_fragment(mut self, enabled: bool) -> Self {
        self.use_view_lifecycle_in_fragment = Some(enabled);
        self
    }

    pub fn ambient_enabled(mut self, enabled: bool) -> Self {
        self.ambient_enabled = Some(enabled);
        self
    }

    pub fn min_zoom_preference(mut self, zoom: f32) -> Self {
        self.min_zoom_preference = Some(zoom);
        self
    }

    pub fn max_zoom_preference(mut self, zoom: f32) -> Self {
        self.max_zoom_preference = Some(zoom);
        self
    }

    pub fn lat_lng_bounds_for_camera_target(mut self, bounds: LatLngBounds) -> Self {
        self.lat_lng_bounds_for_camera_target = Some(bounds);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Merge layout attributes into these options
    ///
    /// Attributes override fields already set. The camera is only taken when
    /// both `cameraTargetLat` and `cameraTargetLng` are present, the target
    /// bounds only when all four corner attributes are. Malformed values are
    /// skipped and unknown keys ignored.
    pub fn create_from_attributes(mut self, attributes: &AttributeSet) -> Self {
        if let Some(map_type) = attributes.parse("mapType", MapType::parse) {
            self.map_type = Some(map_type);
        }

        let target_lat = attributes.number::<f64>("cameraTargetLat");
        let target_lng = attributes.number::<f64>("cameraTargetLng");
        if let (Some(latitude), Some(longitude)) = (target_lat, target_lng) {
            let mut camera = CameraPosition::from_lat_lng_zoom(
                LatLng::new(latitude, longitude),
                attributes.number("cameraZoom").unwrap_or(0.0),
            );
            if let Some(bearing) = attributes.number("cameraBearing") {
                camera.bearing = bearing;
            }
            if let Some(tilt) = attributes.number("cameraTilt") {
                camera.tilt = tilt;
            }
            self.camera = Some(camera);
        }

        let flags: [(&'static str, &mut Option<bool>); 11] = [
            ("uiCompass", &mut self.compass_enabled),
            ("uiRotateGestures", &mut self.rotate_gestures_enabled),
            ("uiScrollGestures", &mut self.scroll_gestures_enabled),
            ("uiTiltGestures", &mut self.tilt_gestures_enabled),
            ("uiZoomControls", &mut self.zoom_controls_enabled),
            ("uiZoomGestures", &mut self.zoom_gestures_enabled),
            ("uiMapToolbar", &mut self.map_toolbar_enabled),
            ("liteMode", &mut self.lite_mode),
            ("zOrderOnTop", &mut self.z_order_on_top),
            ("useViewLifecycle", &mut self.use_view_lifecycle_in_fragment),
            ("ambientEnabled", &mut self.ambient_enabled),
        ];
        for (name, field) in flags {
            if let Some(value) = attributes.flag(name) {
                *field = Some(value);
            }
        }

        if let Some(zoom) = attributes.number("cameraMinZoomPreference") {
            self.min_zoom_preference = Some(zoom);
        }
        if let Some(zoom) = attributes.number("cameraMaxZoomPreference") {
            self.max_zoom_preference = Some(zoom);
        }

        let corners = (
            attributes.number::<f64>("latLngBoundsSouthWestLatitude"),
            attributes.number::<f64>("latLngBoundsSouthWestLongitude"),
            attributes.number::<f64>("latLngBoundsNorthEastLatitude"),
            attributes.number::<f64>("latLngBoundsNorthEastLongitude"),
        );
        if let (Some(south), Some(west), Some(north), Some(east)) = corners {
            self.lat_lng_bounds_for_camera_target = Some(LatLngBounds::new(
                LatLng::new(south, west),
                LatLng::new(north, east),
            ));
        }

        if let Some(color) = attributes.parse("backgroundColor", parse_color) {
            self.background_color = Some(color);
        }

        tracing::debug!(attributes = attributes.len(), "map options merged from attributes");
        self
    }

    /// Build vendor `V`'s native options; only fields that were set are written
    pub fn commit<V: Vendor>(&self) -> V::MapOptions {
        let mut native = V::MapOptions::default();
        if let Some(map_type) = self.map_type {
            native.map_type(map_type.code());
        }
        if let Some(camera) = self.camera {
            native.camera(camera.into());
        }

        let flags: [(Option<bool>, fn(&mut V::MapOptions, bool)); 11] = [
            (self.compass_enabled, |n, v| n.compass_enabled(v)),
            (self.rotate_gestures_enabled, |n, v| n.rotate_gestures_enabled(v)),
            (self.scroll_gestures_enabled, |n, v| n.scroll_gestures_enabled(v)),
            (self.tilt_gestures_enabled, |n, v| n.tilt_gestures_enabled(v)),
            (self.zoom_controls_enabled, |n, v| n.zoom_controls_enabled(v)),
            (self.zoom_gestures_enabled, |n, v| n.zoom_gestures_enabled(v)),
            (self.map_toolbar_enabled, |n, v| n.map_toolbar_enabled(v)),
            (self.lite_mode, |n, v| n.lite_mode(v)),
            (self.z_order_on_top, |n, v| n.z_order_on_top(v)),
            (self.use_view_lifecycle_in_fragment, |n, v| {
                n.use_view_lifecycle_in_fragment(v)
            }),
            (self.ambient_enabled, |n, v| n.ambient_enabled(v)),
        ];
        for (value, apply) in flags {
            if let Some(value) = value {
                apply(&mut native, value);
            }
        }

        if let Some(zoom) = self.min_zoom_preference {
            native.min_zoom_preference(zoom);
        }
        if let Some(zoom) = self.max_zoom_preference {
            native.max_zoom_preference(zoom);
        }
        if let Some(bounds) = self.lat_lng_bounds_for_camera_target {
            native.lat_lng_bounds_for_camera_target(bounds.into());
        }
        if let Some(color) = self.background_color {
            native.background_color(color_to_native(color));
        }
        native
    }
}
