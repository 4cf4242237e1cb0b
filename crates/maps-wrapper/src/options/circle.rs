use crate::convert::{color_to_native, to_native_pattern};
use crate::types::{Color, LatLng, PatternItem};
use crate::vendor::Vendor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vendor's native circle builder
pub trait NativeCircleOptions<V: Vendor> {
    fn center(&mut self, center: V::LatLng);
    fn clickable(&mut self, clickable: bool);
    fn fill_color(&mut self, color: i32);
    fn radius(&mut self, radius: f64);
    fn stroke_color(&mut self, color: i32);
    fn stroke_pattern(&mut self, pattern: Option<Vec<V::PatternItem>>);
    fn stroke_width(&mut self, width: f32);
    fn visible(&mut self, visible: bool);
    fn z_index(&mut self, z_index: f32);
}

/// Settings for a circle about to be added to a map
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleOptions {
    /// Circle center; the backends reject a circle without one
    pub center: Option<LatLng>,
    pub clickable: bool,
    pub fill_color: Color,
    /// Radius in meters
    pub radius: f64,
    pub stroke_color: Color,
    /// `None` draws a solid stroke
    pub stroke_pattern: Option<Vec<PatternItem>>,
    /// Stroke width in screen pixels
    pub stroke_width: f32,
    pub visible: bool,
    pub z_index: f32,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            center: None,
            clickable: false,
            fill_color: Color::TRANSPARENT,
            radius: 0.0,
            stroke_color: Color::BLACK,
            stroke_pattern: None,
            stroke_width: 10.0,
            visible: true,
            z_index: 0.0,
        }
    }
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl CircleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: LatLng) -> Self {
        self.center = Some(center);
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn stroke_pattern(mut self, pattern: Option<Vec<PatternItem>>) -> Self {
        self.stroke_pattern = pattern;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
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

    /// Build vendor `V`'s native builder from these settings
    ///
    /// Every field is written, so the result does not depend on the vendor's
    /// own defaults.
    pub fn commit<V: Vendor>(&self) -> V::CircleOptions {
        let mut native = V::CircleOptions::default();
        if let Some(center) = self.center {
            native.center(center.into());
        }
        native.clickable(self.clickable);
        native.fill_color(color_to_native(self.fill_color));
        native.radius(self.radius);
        native.stroke_color(color_to_native(self.stroke_color));
        native.stroke_pattern(self.stroke_pattern.as_deref().map(to_native_pattern::<V>));
        native.stroke_width(self.stroke_width);
        native.visible(self.visible);
        native.z_index(self.z_index);
        native
    }
}
