use crate::style::StyleHandle;
use crate::types::{LatLngBounds, MapType};

/// Camera zoom floor applied unless the caller sets one
pub const DEFAULT_MIN_ZOOM: f32 = 3.0;

/// Camera zoom ceiling applied unless the caller sets one
pub const DEFAULT_MAX_ZOOM: f32 = 21.0;

/// Settings that can change on a live map
///
/// Unlike [`ExtendedMapOptions`](super::ExtendedMapOptions) every field has a
/// value: applying properties with
/// [`ExtendedMap::set_properties`](crate::ExtendedMap::set_properties) writes
/// all of them, and `map_style: None` restores each backend's default style.
#[derive(Debug, Clone)]
pub struct MapProperties {
    pub building_enabled: bool,
    pub indoor_enabled: bool,
    pub my_location_enabled: bool,
    pub traffic_enabled: bool,
    pub lat_lng_bounds_for_camera_target: Option<LatLngBounds>,
    pub map_style: Option<StyleHandle>,
    pub map_type: MapType,
    pub max_zoom_preference: f32,
    pub min_zoom_preference: f32,
}

impl Default for MapProperties {
    fn default() -> Self {
        Self {
            building_enabled: false,
            indoor_enabled: false,
            my_location_enabled: false,
            traffic_enabled: false,
            lat_lng_bounds_for_camera_target: None,
            map_style: None,
            map_type: MapType::Normal,
            max_zoom_preference: DEFAULT_MAX_ZOOM,
            min_zoom_preference: DEFAULT_MIN_ZOOM,
        }
    }
}

impl MapProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn building_enabled(mut self, enabled: bool) -> Self {
        self.building_enabled = enabled;
        self
    }

    pub fn indoor_enabled(mut self, enabled: bool) -> Self {
        self.indoor_enabled = enabled;
        self
    }

    pub fn my_location_enabled(mut self, enabled: bool) -> Self {
        self.my_location_enabled = enabled;
        self
    }

    pub fn traffic_enabled(mut self, enabled: bool) -> Self {
        self.traffic_enabled = enabled;
        self
    }

    pub fn lat_lng_bounds_for_camera_target(mut self, bounds: Option<LatLngBounds>) -> Self {
        self.lat_lng_bounds_for_camera_target = bounds;
        self
    }

    pub fn map_style(mut self, style: Option<StyleHandle>) -> Self {
        self.map_style = style;
        self
    }

    pub fn map_type(mut self, map_type: MapType) -> Self {
        self.map_type = map_type;
        self
    }

    pub fn max_zoom_preference(mut self, zoom: f32) -> Self {
        self.max_zoom_preference = zoom;
        self
    }

    pub fn min_zoom_preference(mut self, zoom: f32) -> Self {
        self.min_zoom_preference = zoom;
        self
    }
}
