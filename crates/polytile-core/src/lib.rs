//! # Polytile Core
//!
//! Tiling layout engine for regular polygons: deduces how many tiles fit a
//! canvas, where each tile goes (including the out-of-bounds fringe needed by
//! staggered and interlocking shapes), and the polygon path that fills it.
//!
//! Everything here is a pure function of its inputs. Host renderers consume
//! the `(color_index, path)` pairs produced by [`draw_tiles`].

pub mod angle;
pub mod config;
pub mod geometry;
pub mod kind;
pub mod layout;
pub mod metrics;
pub mod path;
pub mod stagger;
pub mod tiling;

pub use angle::Angle;
pub use config::{ConfigError, SizingMode, TilingConfiguration, TilingConfigurationBuilder};
pub use geometry::{Point, Rect, Size};
pub use kind::PolygonKind;
pub use layout::{layout, TilingLayoutMetrics};
pub use metrics::{deduce, deduce_fixed, deduce_flexible, DeducedTilingMetrics};
pub use path::{
    initial_path, initial_polygon_path, regular_polygon_path, rotate, scale, scale_with_border,
    BezierPath,
};
pub use stagger::{EffectDimension, StaggerEffect};
pub use tiling::{draw_tiles, Tile, Tiler};
