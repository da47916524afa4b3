use serde::{Deserialize, Serialize};

use crate::angle::Angle;
use crate::geometry::{Point, Rect, Size};
use crate::kind::PolygonKind;
use crate::stagger::StaggerEffect;

/// Where one tile lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TilingLayoutMetrics {
    /// Top-left corner of the tile's bounding box.
    pub offset: Point,
    /// Shape rotation in radians, including the kind's initial rotation.
    pub rotation: Angle,
    /// Vertical stagger applied to this tile, in points.
    pub applied_stagger: f64,
    pub bounding_rect: Rect,
    /// No part of the tile overlaps the canvas.
    pub is_out_of_bounds: bool,
    pub center_point: Point,
    /// Radius of the circle the unscaled polygon is drawn on.
    pub radius: f64,
}

fn is_odd(index: i64) -> bool {
    index.rem_euclid(2) == 1
}

/// Compute the offset, rotation and visibility of tile `(tile_x, tile_y)`.
///
/// Indices may be negative or exceed the deduced counts; staggered and
/// interlocking tilings need a one-tile fringe beyond each canvas edge.
pub fn layout(
    kind: PolygonKind,
    tile_x: i64,
    tile_y: i64,
    tile_size: Size,
    inter_tile_spacing: f64,
    canvas_rect: Rect,
    stagger: StaggerEffect,
) -> TilingLayoutMetrics {
    let width = tile_size.width;
    let height = tile_size.height;
    let padding = inter_tile_spacing / 2.0;
    let row_pitch = height + inter_tile_spacing;
    let x = tile_x as f64;
    let y = tile_y as f64;

    let mut rotation = kind.initial_rotation();
    let applied_stagger;
    let offset = match kind {
        PolygonKind::EquilateralTriangle { .. } => {
            // Columns -1 & 0, 1 & 2, ... slide together along their shared
            // slanted edge.
            let column_multiplier = (tile_x + 1).div_euclid(2) as f64;
            let stagger_value = stagger.amount() * row_pitch;
            // tan(30°) = sin 30° / sin 60°
            let x_stagger = column_multiplier * stagger_value / 3.0_f64.sqrt();
            let y_stagger = wrap(column_multiplier * stagger_value, row_pitch);
            applied_stagger = y_stagger;
            if is_odd(tile_x) {
                rotation = rotation + Angle::HALF_TURN;
            }
            Point::new(
                x * (width - width / 2.0 + inter_tile_spacing) + padding + x_stagger,
                y * row_pitch + padding + y_stagger,
            )
        }
        PolygonKind::Square { .. } | PolygonKind::Octagon { .. } | PolygonKind::Rectangle { .. } => {
            let y_stagger = wrap(x * stagger.amount() * row_pitch, row_pitch);
            applied_stagger = y_stagger;
            Point::new(
                x * (width + inter_tile_spacing) + padding,
                y * row_pitch + padding + y_stagger,
            )
        }
        PolygonKind::Hexagon { .. } => {
            applied_stagger = 0.0;
            // Base length is half the tile width; pulling each column in by
            // half of that nests it against its neighbour.
            let interlock = width / 4.0;
            let x_offset = x * (width + inter_tile_spacing - interlock) + padding;
            let y_offset = if is_odd(tile_x) {
                y * row_pitch + height / 2.0 + padding * 2.0
            } else {
                y * row_pitch + padding
            };
            Point::new(x_offset, y_offset)
        }
    };

    let bounding_rect = Rect::new(offset, tile_size);
    let is_out_of_bounds = !canvas_rect.intersects(&bounding_rect);
    log::trace!("tile ({tile_x}, {tile_y}) at {offset:?}, out of bounds: {is_out_of_bounds}");

    TilingLayoutMetrics {
        offset,
        rotation,
        applied_stagger,
        bounding_rect,
        is_out_of_bounds,
        center_point: bounding_rect.center(),
        radius: width.min(height) / 2.0 - inter_tile_spacing / 2.0,
    }
}

/// Wrap a stagger offset into `[0, period)` so shifted tiles stay in view.
fn wrap(offset: f64, period: f64) -> f64 {
    if period > 0.0 && offset.is_finite() {
        offset.rem_euclid(period)
    } else {
        0.0
    }
}
