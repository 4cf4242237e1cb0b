//! Canonical option builders
//!
//! Options are recorded once in domain terms and translated into each
//! vendor's native builder by `commit::<V>()`, so no setting can reach one
//! backend and miss the other.

mod circle;
mod map;
mod properties;
mod tile_overlay;

pub use circle::{CircleOptions, NativeCircleOptions};
pub use map::{AttributeSet, ExtendedMapOptions, NativeMapOptions};
pub use properties::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, MapProperties};
pub use tile_overlay::{NativeTileOverlayOptions, TileOverlayOptions};
