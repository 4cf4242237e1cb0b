//! Recording native backends for unit tests
//!
//! One fake stands in for every overlay kind of a vendor. It stores the values
//! it was given in that vendor's native types, logs every call, and can be told
//! to fail a named operation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::backend::Backends;
use crate::map::NativeMap;
use crate::overlay::{
    CircleBackend, GroundOverlayBackend, NativeCircle, NativeGroundOverlay, NativePolygon,
    NativeTileOverlay, PolygonBackend, TileOverlayBackend,
};
use crate::style::{NativeStyleLoader, StyleBackend};
use crate::types::Tag;
use crate::vendor::{Gms, Hms, Native, NativeError, NativeResult, Vendor};
use crate::{MapBackend, StyleHandle};

pub(crate) struct OverlayState<V: Vendor> {
    pub calls: Vec<&'static str>,
    pub fail_on: Option<&'static str>,
    pub removed: bool,
    pub center: Option<V::LatLng>,
    pub radius: f64,
    pub stroke_width: f32,
    pub stroke_color: i32,
    pub stroke_pattern: Option<Vec<V::PatternItem>>,
    pub stroke_joint_type: i32,
    pub fill_color: i32,
    pub tag: Option<Tag>,
    pub clickable: bool,
    pub visible: bool,
    pub geodesic: bool,
    pub z_index: f32,
    pub points: Vec<V::LatLng>,
    pub holes: Vec<Vec<V::LatLng>>,
    pub transparency: f32,
    pub bearing: f32,
    pub position: Option<V::LatLng>,
    pub bounds: Option<V::LatLngBounds>,
    pub width: f32,
    pub height: f32,
    pub image: Option<V::BitmapDescriptor>,
    pub fade_in: bool,
}

impl<V: Vendor> Default for OverlayState<V> {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
            removed: false,
            center: None,
            radius: 0.0,
            stroke_width: 10.0,
            stroke_color: 0,
            stroke_pattern: None,
            stroke_joint_type: 0,
            fill_color: 0,
            tag: None,
            clickable: false,
            visible: true,
            geodesic: false,
            z_index: 0.0,
            points: Vec::new(),
            holes: Vec::new(),
            transparency: 0.0,
            bearing: 0.0,
            position: None,
            bounds: None,
            width: 0.0,
            height: 0.0,
            image: None,
            fade_in: true,
        }
    }
}

/// Shared handle to a fake native overlay; clones observe the same state
pub(crate) struct FakeOverlay<V: Vendor>(Rc<RefCell<OverlayState<V>>>);

impl<V: Vendor> Clone for FakeOverlay<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Vendor> FakeOverlay<V> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(OverlayState::default())))
    }

    pub fn failing_on(operation: &'static str) -> Self {
        let fake = Self::new();
        fake.0.borrow_mut().fail_on = Some(operation);
        fake
    }

    pub fn state(&self) -> std::cell::Ref<'_, OverlayState<V>> {
        self.0.borrow()
    }

    pub fn state_mut(&self) -> std::cell::RefMut<'_, OverlayState<V>> {
        self.0.borrow_mut()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.0.borrow().calls.clone()
    }

    fn call(&self, operation: &'static str) -> NativeResult<()> {
        let mut state = self.0.borrow_mut();
        state.calls.push(operation);
        if state.fail_on == Some(operation) {
            return Err(NativeError::new(format!("{} failed on {}", operation, V::ID)));
        }
        Ok(())
    }

    fn set(&mut self, operation: &'static str, apply: impl FnOnce(&mut OverlayState<V>)) -> NativeResult<()> {
        self.call(operation)?;
        apply(&mut *self.0.borrow_mut());
        Ok(())
    }

    fn read<T>(&self, operation: &'static str, get: impl FnOnce(&OverlayState<V>) -> T) -> NativeResult<T> {
        self.call(operation)?;
        Ok(get(&*self.0.borrow()))
    }

    pub fn as_circle(&self) -> Box<dyn CircleBackend> {
        Box::new(Native::<V, _>::new(self.clone()))
    }

    pub fn as_ground_overlay(&self) -> Box<dyn GroundOverlayBackend> {
        Box::new(Native::<V, _>::new(self.clone()))
    }

    pub fn as_polygon(&self) -> Box<dyn PolygonBackend> {
        Box::new(Native::<V, _>::new(self.clone()))
    }

    pub fn as_tile_overlay(&self) -> Box<dyn TileOverlayBackend> {
        Box::new(Native::<V, _>::new(self.clone()))
    }
}

fn missing(what: &str) -> NativeError {
    NativeError::new(format!("{what} was never set"))
}

/// Bind up to one fake per vendor, GMS first
pub(crate) fn bind<B: ?Sized>(gms: Option<Box<B>>, hms: Option<Box<B>>) -> Backends<Box<B>> {
    Backends::new().with(Gms::ID, gms).with(Hms::ID, hms)
}

impl<V: Vendor> NativeCircle<V> for FakeOverlay<V> {
    fn set_center(&mut self, center: V::LatLng) -> NativeResult<()> {
        self.set("set_center", |s| s.center = Some(center))
    }

    fn center(&self) -> NativeResult<V::LatLng> {
        self.read("center", |s| s.center.clone())?
            .ok_or_else(|| missing("center"))
    }

    fn set_radius(&mut self, radius: f64) -> NativeResult<()> {
        self.set("set_radius", |s| s.radius = radius)
    }

    fn radius(&self) -> NativeResult<f64> {
        self.read("radius", |s| s.radius)
    }

    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()> {
        self.set("set_stroke_width", |s| s.stroke_width = width)
    }

    fn stroke_width(&self) -> NativeResult<f32> {
        self.read("stroke_width", |s| s.stroke_width)
    }

    fn set_stroke_color(&mut self, color: i32) -> NativeResult<()> {
        self.set("set_stroke_color", |s| s.stroke_color = color)
    }

    fn stroke_color(&self) -> NativeResult<i32> {
        self.read("stroke_color", |s| s.stroke_color)
    }

    fn set_stroke_pattern(&mut self, pattern: Option<Vec<V::PatternItem>>) -> NativeResult<()> {
        self.set("set_stroke_pattern", |s| s.stroke_pattern = pattern)
    }

    fn stroke_pattern(&self) -> NativeResult<Option<Vec<V::PatternItem>>> {
        self.read("stroke_pattern", |s| s.stroke_pattern.clone())
    }

    fn set_fill_color(&mut self, color: i32) -> NativeResult<()> {
        self.set("set_fill_color", |s| s.fill_color = color)
    }

    fn fill_color(&self) -> NativeResult<i32> {
        self.read("fill_color", |s| s.fill_color)
    }

    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()> {
        self.set("set_tag", |s| s.tag = tag)
    }

    fn tag(&self) -> NativeResult<Option<Tag>> {
        self.read("tag", |s| s.tag.clone())
    }

    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()> {
        self.set("set_clickable", |s| s.clickable = clickable)
    }

    fn is_clickable(&self) -> NativeResult<bool> {
        self.read("is_clickable", |s| s.clickable)
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.set("set_visible", |s| s.visible = visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.read("is_visible", |s| s.visible)
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.set("set_z_index", |s| s.z_index = z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.read("z_index", |s| s.z_index)
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.set("remove", |s| s.removed = true)
    }
}

impl<V: Vendor> NativeGroundOverlay<V> for FakeOverlay<V> {
    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()> {
        self.set("set_tag", |s| s.tag = tag)
    }

    fn tag(&self) -> NativeResult<Option<Tag>> {
        self.read("tag", |s| s.tag.clone())
    }

    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()> {
        self.set("set_transparency", |s| s.transparency = transparency)
    }

    fn transparency(&self) -> NativeResult<f32> {
        self.read("transparency", |s| s.transparency)
    }

    fn set_bearing(&mut self, bearing: f32) -> NativeResult<()> {
        self.set("set_bearing", |s| s.bearing = bearing)
    }

    fn bearing(&self) -> NativeResult<f32> {
        self.read("bearing", |s| s.bearing)
    }

    fn set_position(&mut self, position: V::LatLng) -> NativeResult<()> {
        self.set("set_position", |s| s.position = Some(position))
    }

    fn position(&self) -> NativeResult<V::LatLng> {
        self.read("position", |s| s.position.clone())?
            .ok_or_else(|| missing("position"))
    }

    fn set_dimensions(&mut self, width: f32) -> NativeResult<()> {
        self.set("set_dimensions", |s| s.width = width)
    }

    fn set_dimensions_with_height(&mut self, width: f32, height: f32) -> NativeResult<()> {
        self.set("set_dimensions_with_height", |s| {
            s.width = width;
            s.height = height;
        })
    }

    fn width(&self) -> NativeResult<f32> {
        self.read("width", |s| s.width)
    }

    fn height(&self) -> NativeResult<f32> {
        self.read("height", |s| s.height)
    }

    fn set_position_from_bounds(&mut self, bounds: V::LatLngBounds) -> NativeResult<()> {
        self.set("set_position_from_bounds", |s| s.bounds = Some(bounds))
    }

    fn bounds(&self) -> NativeResult<V::LatLngBounds> {
        self.read("bounds", |s| s.bounds.clone())?
            .ok_or_else(|| missing("bounds"))
    }

    fn set_image(&mut self, image: V::BitmapDescriptor) -> NativeResult<()> {
        self.set("set_image", |s| s.image = Some(image))
    }

    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()> {
        self.set("set_clickable", |s| s.clickable = clickable)
    }

    fn is_clickable(&self) -> NativeResult<bool> {
        self.read("is_clickable", |s| s.clickable)
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.set("set_z_index", |s| s.z_index = z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.read("z_index", |s| s.z_index)
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.set("set_visible", |s| s.visible = visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.read("is_visible", |s| s.visible)
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.set("remove", |s| s.removed = true)
    }
}

impl<V: Vendor> NativePolygon<V> for FakeOverlay<V> {
    fn set_stroke_width(&mut self, width: f32) -> NativeResult<()> {
        self.set("set_stroke_width", |s| s.stroke_width = width)
    }

    fn stroke_width(&self) -> NativeResult<f32> {
        self.read("stroke_width", |s| s.stroke_width)
    }

    fn set_stroke_color(&mut self, color: i32) -> NativeResult<()> {
        self.set("set_stroke_color", |s| s.stroke_color = color)
    }

    fn stroke_color(&self) -> NativeResult<i32> {
        self.read("stroke_color", |s| s.stroke_color)
    }

    fn set_stroke_joint_type(&mut self, joint_type: i32) -> NativeResult<()> {
        self.set("set_stroke_joint_type", |s| s.stroke_joint_type = joint_type)
    }

    fn stroke_joint_type(&self) -> NativeResult<i32> {
        self.read("stroke_joint_type", |s| s.stroke_joint_type)
    }

    fn set_stroke_pattern(&mut self, pattern: Option<Vec<V::PatternItem>>) -> NativeResult<()> {
        self.set("set_stroke_pattern", |s| s.stroke_pattern = pattern)
    }

    fn stroke_pattern(&self) -> NativeResult<Option<Vec<V::PatternItem>>> {
        self.read("stroke_pattern", |s| s.stroke_pattern.clone())
    }

    fn set_fill_color(&mut self, color: i32) -> NativeResult<()> {
        self.set("set_fill_color", |s| s.fill_color = color)
    }

    fn fill_color(&self) -> NativeResult<i32> {
        self.read("fill_color", |s| s.fill_color)
    }

    fn set_tag(&mut self, tag: Option<Tag>) -> NativeResult<()> {
        self.set("set_tag", |s| s.tag = tag)
    }

    fn tag(&self) -> NativeResult<Option<Tag>> {
        self.read("tag", |s| s.tag.clone())
    }

    fn set_points(&mut self, points: Vec<V::LatLng>) -> NativeResult<()> {
        self.set("set_points", |s| s.points = points)
    }

    fn points(&self) -> NativeResult<Vec<V::LatLng>> {
        self.read("points", |s| s.points.clone())
    }

    fn set_holes(&mut self, holes: Vec<Vec<V::LatLng>>) -> NativeResult<()> {
        self.set("set_holes", |s| s.holes = holes)
    }

    fn holes(&self) -> NativeResult<Vec<Vec<V::LatLng>>> {
        self.read("holes", |s| s.holes.clone())
    }

    fn set_clickable(&mut self, clickable: bool) -> NativeResult<()> {
        self.set("set_clickable", |s| s.clickable = clickable)
    }

    fn is_clickable(&self) -> NativeResult<bool> {
        self.read("is_clickable", |s| s.clickable)
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.set("set_visible", |s| s.visible = visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.read("is_visible", |s| s.visible)
    }

    fn set_geodesic(&mut self, geodesic: bool) -> NativeResult<()> {
        self.set("set_geodesic", |s| s.geodesic = geodesic)
    }

    fn is_geodesic(&self) -> NativeResult<bool> {
        self.read("is_geodesic", |s| s.geodesic)
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.set("set_z_index", |s| s.z_index = z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.read("z_index", |s| s.z_index)
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.set("remove", |s| s.removed = true)
    }
}

impl<V: Vendor> NativeTileOverlay<V> for FakeOverlay<V> {
    fn set_fade_in(&mut self, fade_in: bool) -> NativeResult<()> {
        self.set("set_fade_in", |s| s.fade_in = fade_in)
    }

    fn fade_in(&self) -> NativeResult<bool> {
        self.read("fade_in", |s| s.fade_in)
    }

    fn set_transparency(&mut self, transparency: f32) -> NativeResult<()> {
        self.set("set_transparency", |s| s.transparency = transparency)
    }

    fn transparency(&self) -> NativeResult<f32> {
        self.read("transparency", |s| s.transparency)
    }

    fn set_visible(&mut self, visible: bool) -> NativeResult<()> {
        self.set("set_visible", |s| s.visible = visible)
    }

    fn is_visible(&self) -> NativeResult<bool> {
        self.read("is_visible", |s| s.visible)
    }

    fn set_z_index(&mut self, z_index: f32) -> NativeResult<()> {
        self.set("set_z_index", |s| s.z_index = z_index)
    }

    fn z_index(&self) -> NativeResult<f32> {
        self.read("z_index", |s| s.z_index)
    }

    fn clear_tile_cache(&mut self) -> NativeResult<()> {
        self.call("clear_tile_cache")
    }

    fn remove(&mut self) -> NativeResult<()> {
        self.set("remove", |s| s.removed = true)
    }
}

/// Style loader knowing a fixed set of raw resources
pub(crate) struct FakeStyleLoader {
    resources: HashMap<u32, String>,
    reject_json: bool,
}

impl FakeStyleLoader {
    pub fn with_resources(resources: &[(u32, &str)]) -> Self {
        Self {
            resources: resources
                .iter()
                .map(|(id, json)| (*id, json.to_string()))
                .collect(),
            reject_json: false,
        }
    }

    pub fn rejecting_json() -> Self {
        Self {
            resources: HashMap::new(),
            reject_json: true,
        }
    }

    pub fn boxed<V: Vendor>(self) -> Box<dyn StyleBackend>
    where
        Self: NativeStyleLoader<V>,
    {
        Box::new(Native::<V, _>::new(self))
    }

    fn lookup(&self, resource_id: u32) -> NativeResult<&str> {
        self.resources
            .get(&resource_id)
            .map(String::as_str)
            .ok_or_else(|| NativeError::new(format!("resource {resource_id} not found")))
    }

    fn check_json<'a>(&self, json: &'a str) -> NativeResult<&'a str> {
        if self.reject_json {
            Err(NativeError::new("style json rejected"))
        } else {
            Ok(json)
        }
    }
}

impl NativeStyleLoader<Gms> for FakeStyleLoader {
    fn load_raw_resource_style(&self, resource_id: u32) -> NativeResult<crate::vendor::gms::MapStyleOptions> {
        self.lookup(resource_id).map(crate::vendor::gms::MapStyleOptions::new)
    }

    fn style_from_json(&self, json: &str) -> NativeResult<crate::vendor::gms::MapStyleOptions> {
        self.check_json(json).map(crate::vendor::gms::MapStyleOptions::new)
    }
}

impl NativeStyleLoader<Hms> for FakeStyleLoader {
    fn load_raw_resource_style(&self, resource_id: u32) -> NativeResult<crate::vendor::hms::MapStyleOptions> {
        self.lookup(resource_id).map(crate::vendor::hms::MapStyleOptions::new)
    }

    fn style_from_json(&self, json: &str) -> NativeResult<crate::vendor::hms::MapStyleOptions> {
        self.check_json(json).map(crate::vendor::hms::MapStyleOptions::new)
    }
}

pub(crate) struct MapState<V: Vendor> {
    pub added: Vec<V::CircleOptions>,
    pub circles: Vec<FakeOverlay<V>>,
    pub added_tiles: Vec<V::TileOverlayOptions>,
    pub tile_overlays: Vec<FakeOverlay<V>>,
    pub style_json: Option<Option<String>>,
    pub map_type: Option<i32>,
    pub building_enabled: bool,
    pub indoor_enabled: bool,
    pub my_location_enabled: bool,
    pub traffic_enabled: bool,
    pub camera_bounds: Option<V::LatLngBounds>,
    pub zoom_range: (Option<f32>, Option<f32>),
    pub fail_add: bool,
    pub reject_style: bool,
    /// Refuse my-location, as without the location permission
    pub deny_location: bool,
}

/// Fake map handing out [`FakeOverlay`] circles
pub(crate) struct FakeMap<V: Vendor>(Rc<RefCell<MapState<V>>>);

impl<V: Vendor> Clone for FakeMap<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V: Vendor> FakeMap<V> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(MapState {
            added: Vec::new(),
            circles: Vec::new(),
            added_tiles: Vec::new(),
            tile_overlays: Vec::new(),
            style_json: None,
            map_type: None,
            building_enabled: false,
            indoor_enabled: false,
            my_location_enabled: false,
            traffic_enabled: false,
            camera_bounds: None,
            zoom_range: (None, None),
            fail_add: false,
            reject_style: false,
            deny_location: false,
        })))
    }

    pub fn state(&self) -> std::cell::Ref<'_, MapState<V>> {
        self.0.borrow()
    }

    pub fn state_mut(&self) -> std::cell::RefMut<'_, MapState<V>> {
        self.0.borrow_mut()
    }
}

/// Read the JSON back out of whichever native style type a vendor uses
pub(crate) trait StyleJson {
    fn json(&self) -> &str;
}

impl StyleJson for crate::vendor::gms::MapStyleOptions {
    fn json(&self) -> &str {
        &self.json
    }
}

impl StyleJson for crate::vendor::hms::MapStyleOptions {
    fn json(&self) -> &str {
        &self.json
    }
}

impl<V> NativeMap<V> for FakeMap<V>
where
    V: Vendor,
    V::MapStyleOptions: StyleJson,
{
    type Circle = FakeOverlay<V>;
    type TileOverlay = FakeOverlay<V>;

    fn add_circle(&mut self, options: V::CircleOptions) -> NativeResult<FakeOverlay<V>> {
        let mut state = self.0.borrow_mut();
        if state.fail_add {
            return Err(NativeError::new(format!("{} refused the circle", V::ID)));
        }
        state.added.push(options);
        let circle = FakeOverlay::new();
        state.circles.push(circle.clone());
        Ok(circle)
    }

    fn add_tile_overlay(&mut self, options: V::TileOverlayOptions) -> NativeResult<FakeOverlay<V>> {
        let mut state = self.0.borrow_mut();
        if state.fail_add {
            return Err(NativeError::new(format!("{} refused the tile overlay", V::ID)));
        }
        state.added_tiles.push(options);
        let overlay = FakeOverlay::new();
        state.tile_overlays.push(overlay.clone());
        Ok(overlay)
    }

    fn set_map_type(&mut self, code: i32) -> NativeResult<()> {
        self.0.borrow_mut().map_type = Some(code);
        Ok(())
    }

    fn set_buildings_enabled(&mut self, enabled: bool) -> NativeResult<()> {
        self.0.borrow_mut().building_enabled = enabled;
        Ok(())
    }

    fn set_indoor_enabled(&mut self, enabled: bool) -> NativeResult<()> {
        self.0.borrow_mut().indoor_enabled = enabled;
        Ok(())
    }

    fn set_my_location_enabled(&mut self, enabled: bool) -> NativeResult<()> {
        let mut state = self.0.borrow_mut();
        if enabled && state.deny_location {
            return Err(NativeError::new("location permission missing"));
        }
        state.my_location_enabled = enabled;
        Ok(())
    }

    fn set_traffic_enabled(&mut self, enabled: bool) -> NativeResult<()> {
        self.0.borrow_mut().traffic_enabled = enabled;
        Ok(())
    }

    fn set_lat_lng_bounds_for_camera_target(
        &mut self,
        bounds: Option<V::LatLngBounds>,
    ) -> NativeResult<()> {
        self.0.borrow_mut().camera_bounds = bounds;
        Ok(())
    }

    fn set_min_zoom_preference(&mut self, zoom: f32) -> NativeResult<()> {
        self.0.borrow_mut().zoom_range.0 = Some(zoom);
        Ok(())
    }

    fn set_max_zoom_preference(&mut self, zoom: f32) -> NativeResult<()> {
        self.0.borrow_mut().zoom_range.1 = Some(zoom);
        Ok(())
    }

    fn set_map_style(&mut self, style: Option<&V::MapStyleOptions>) -> NativeResult<bool> {
        let mut state = self.0.borrow_mut();
        state.style_json = Some(style.map(|style| style.json().to_string()));
        Ok(!state.reject_style)
    }
}

impl<V> FakeMap<V>
where
    V: Vendor,
    V::MapStyleOptions: StyleJson,
{
    pub fn as_map(&self) -> Box<dyn MapBackend> {
        Box::new(Native::<V, _>::new(self.clone()))
    }
}

/// Style handle with only the given vendor loaded
pub(crate) fn style_for<V: Vendor>(json: &str) -> StyleHandle
where
    FakeStyleLoader: NativeStyleLoader<V>,
{
    let loader = crate::StyleLoader::new(
        Backends::new().with(V::ID, Some(FakeStyleLoader::with_resources(&[(1, json)]).boxed::<V>())),
    );
    loader.load_raw_resource_style(1)
}
