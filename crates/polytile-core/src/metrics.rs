//! Closed-form column/row counts and tile sizes per polygon family.
//!
//! The per-shape constants make neighbouring polygons interlock without a
//! visible gap; they are not derivable from one general formula.

use serde::{Deserialize, Serialize};

use crate::angle::sin_60;
use crate::config::{SizingMode, TilingConfiguration};
use crate::geometry::Size;
use crate::kind::PolygonKind;

/// Upper bound on tiles along one axis; keeps index arithmetic in `i64`.
pub const MAX_TILES_PER_AXIS: usize = i32::MAX as usize;

/// How many tiles fit the canvas and how big each one is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeducedTilingMetrics {
    pub columns: usize,
    pub rows: usize,
    pub effective_tile_size: Size,
}

impl DeducedTilingMetrics {
    pub fn empty(effective_tile_size: Size) -> Self {
        Self {
            columns: 0,
            rows: 0,
            effective_tile_size,
        }
    }

    pub fn tile_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }
}

/// `ceil(value)` as a tile count; negative, NaN and infinite values give zero.
fn ceil_count(value: f64) -> usize {
    if value.is_finite() && value > 0.0 {
        (value.ceil() as usize).min(MAX_TILES_PER_AXIS)
    } else {
        0
    }
}

/// Run whichever deduction the configuration's sizing mode selects.
pub fn deduce(config: &TilingConfiguration) -> DeducedTilingMetrics {
    match config.sizing() {
        SizingMode::FixedWidth(width) => deduce_fixed(
            config.kind(),
            config.canvas_size(),
            config.inter_tile_spacing(),
            width,
        ),
        SizingMode::HorizontalTarget(target) => deduce_flexible(
            config.kind(),
            config.canvas_size(),
            config.inter_tile_spacing(),
            target,
        ),
    }
}

/// Tiles have a fixed width; work out how many of them fit the canvas.
pub fn deduce_fixed(
    kind: PolygonKind,
    canvas_size: Size,
    inter_tile_spacing: f64,
    fixed_width: f64,
) -> DeducedTilingMetrics {
    let (columns, rows, effective_tile_size) = match kind {
        PolygonKind::EquilateralTriangle { .. } => {
            // Alternate triangles point up and down, so two of them share one
            // tile width.
            let approximate_tile_width = fixed_width * 0.5 + inter_tile_spacing;
            let height = fixed_width * sin_60();
            (
                ceil_count(canvas_size.width / approximate_tile_width),
                ceil_count(canvas_size.height / fixed_width),
                Size::new(fixed_width, height),
            )
        }
        PolygonKind::Square { .. } | PolygonKind::Octagon { .. } => (
            ceil_count(canvas_size.width / fixed_width),
            ceil_count(canvas_size.height / fixed_width),
            Size::new(fixed_width, fixed_width),
        ),
        PolygonKind::Rectangle {
            width_to_height_ratio,
            ..
        } => (
            ceil_count(canvas_size.width / fixed_width),
            ceil_count(canvas_size.height / fixed_width),
            Size::new(fixed_width, fixed_width / width_to_height_ratio),
        ),
        PolygonKind::Hexagon { .. } => {
            // Staggered hexagons overlap a quarter of their width.
            let approximate_tile_width = fixed_width * 0.75 + inter_tile_spacing;
            let height = fixed_width * sin_60();
            (
                ceil_count(canvas_size.width / approximate_tile_width),
                ceil_count(height),
                Size::new(fixed_width, height),
            )
        }
    };

    let metrics = if canvas_size.is_empty() {
        DeducedTilingMetrics::empty(effective_tile_size)
    } else {
        DeducedTilingMetrics {
            columns,
            rows,
            effective_tile_size,
        }
    };
    log::debug!(
        "fixed {} width={fixed_width}: {}x{} tiles of {:?}",
        kind.name(),
        metrics.columns,
        metrics.rows,
        metrics.effective_tile_size
    );
    metrics
}

/// A target number of tiles per row is given; work out how big each one is.
pub fn deduce_flexible(
    kind: PolygonKind,
    canvas_size: Size,
    inter_tile_spacing: f64,
    target: f64,
) -> DeducedTilingMetrics {
    let columns = ceil_count(target);
    let column_count = columns as f64;

    // Ten squares need ten gaps, but ten interlocking triangles only five.
    let usable_width = match kind {
        PolygonKind::EquilateralTriangle { .. } => {
            canvas_size.width - column_count * inter_tile_spacing + column_count / 2.0
        }
        PolygonKind::Square { .. }
        | PolygonKind::Hexagon { .. }
        | PolygonKind::Octagon { .. }
        | PolygonKind::Rectangle { .. } => canvas_size.width - column_count * inter_tile_spacing,
    };

    let effective_tile_size = match kind {
        PolygonKind::EquilateralTriangle { .. } => {
            // 3 triangles: (w - 1) / 2, 4 triangles: (w - 2) / 2.5, 5: (w - 2) / 3
            let width = (usable_width - (target / 2.0).floor()) / (target / 2.0 + 0.5);
            Size::new(width, width * sin_60())
        }
        PolygonKind::Square { .. } | PolygonKind::Octagon { .. } => {
            let width = usable_width / target;
            Size::new(width, width)
        }
        PolygonKind::Rectangle {
            width_to_height_ratio,
            ..
        } => {
            let width = usable_width / target;
            Size::new(width, width / width_to_height_ratio)
        }
        PolygonKind::Hexagon { .. } => {
            // Each staggered hexagon takes 3/4 of a square's span, plus the
            // final quarter at the row's end.
            let width = 4.0 * usable_width / (3.0 * target + 1.0);
            Size::new(width, width * sin_60())
        }
    };

    let metrics = if canvas_size.is_empty() {
        DeducedTilingMetrics::empty(effective_tile_size)
    } else {
        DeducedTilingMetrics {
            columns,
            rows: ceil_count(canvas_size.height / effective_tile_size.height),
            effective_tile_size,
        }
    };
    log::debug!(
        "flexible {} target={target}: {}x{} tiles of {:?}",
        kind.name(),
        metrics.columns,
        metrics.rows,
        metrics.effective_tile_size
    );
    metrics
}
