//! Walks every tile of a configuration, including the fringe, and produces
//! the scaled path for each visible one.

use crate::config::TilingConfiguration;
use crate::geometry::Rect;
use crate::layout::{layout, TilingLayoutMetrics};
use crate::metrics::{deduce, DeducedTilingMetrics};
use crate::path::{polygon_path, scale, BezierPath};

/// One visible tile, ready to be filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub tile_x: i64,
    pub tile_y: i64,
    pub layout: TilingLayoutMetrics,
    pub path: BezierPath,
}

/// Deduced metrics plus the per-tile pipeline for one configuration.
#[derive(Debug, Clone)]
pub struct Tiler {
    config: TilingConfiguration,
    metrics: DeducedTilingMetrics,
    canvas_rect: Rect,
}

impl Tiler {
    pub fn new(config: TilingConfiguration) -> Self {
        let metrics = deduce(&config);
        Self {
            config,
            metrics,
            canvas_rect: Rect::from_size(config.canvas_size()),
        }
    }

    pub fn config(&self) -> &TilingConfiguration {
        &self.config
    }

    pub fn metrics(&self) -> &DeducedTilingMetrics {
        &self.metrics
    }

    /// Every `(tile_x, tile_y)` pair the pipeline visits, column by column.
    ///
    /// Both axes run from -1 through the deduced count so staggered and
    /// interlocking shapes have no gap at the canvas edges.
    pub fn indices(&self) -> impl Iterator<Item = (i64, i64)> {
        let (column_end, row_end) = if self.metrics.tile_count() == 0 {
            (-1, -1)
        } else {
            (self.metrics.columns as i64 + 1, self.metrics.rows as i64 + 1)
        };
        (-1..column_end).flat_map(move |tile_x| (-1..row_end).map(move |tile_y| (tile_x, tile_y)))
    }

    /// Layout of a single tile, whether or not it is visible.
    pub fn layout_tile(&self, tile_x: i64, tile_y: i64) -> TilingLayoutMetrics {
        layout(
            self.config.kind(),
            tile_x,
            tile_y,
            self.metrics.effective_tile_size,
            self.config.inter_tile_spacing(),
            self.canvas_rect,
            self.config.stagger(),
        )
    }

    /// The visible tiles in drawing order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.indices().filter_map(move |(tile_x, tile_y)| {
            let layout = self.layout_tile(tile_x, tile_y);
            if layout.is_out_of_bounds {
                return None;
            }
            Some(Tile {
                tile_x,
                tile_y,
                path: self.tile_path(&layout),
                layout,
            })
        })
    }

    fn tile_path(&self, layout: &TilingLayoutMetrics) -> BezierPath {
        let rect = layout.bounding_rect;
        // Spacing wider than the tile gives a negative radius, which flips the
        // vertices through the center. Only a zero radius needs replacing;
        // scaling sets the final size.
        let radius = if layout.radius != 0.0 {
            layout.radius
        } else {
            rect.width().min(rect.height()) / 2.0
        };
        let initial = polygon_path(
            self.config.kind(),
            rect,
            layout.center_point,
            radius,
            layout.rotation,
        );
        scale(&initial, rect, layout.center_point, true)
    }
}

/// Assigns palette indices to visible tiles in drawing order.
///
/// Tiles poking above the canvas repeat the previous index, so the first
/// fully visible tile in the top-left corner gets the first color.
#[derive(Debug, Clone)]
pub struct ColorPatternCounter {
    counter: i64,
    palette_len: usize,
}

impl ColorPatternCounter {
    /// A palette length of zero is treated as one.
    pub fn new(palette_len: usize) -> Self {
        Self {
            counter: -1,
            palette_len: palette_len.max(1),
        }
    }

    pub fn next_index(&mut self, bounding_rect: &Rect) -> usize {
        self.counter += 1;
        if bounding_rect.min_y() < 0.0 {
            self.counter -= 1;
        }
        self.counter.rem_euclid(self.palette_len as i64) as usize
    }
}

/// Call `draw` with `(color_index, path)` for each visible tile and return how
/// many were drawn.
pub fn draw_tiles<F>(config: &TilingConfiguration, palette_len: usize, mut draw: F) -> usize
where
    F: FnMut(usize, &BezierPath),
{
    let tiler = Tiler::new(*config);
    let mut colors = ColorPatternCounter::new(palette_len);
    let mut drawn = 0;
    for tile in tiler.tiles() {
        let index = colors.next_index(&tile.layout.bounding_rect);
        draw(index, &tile.path);
        drawn += 1;
    }
    log::debug!(
        "drew {drawn} {} tiles on {:?}",
        config.kind().name(),
        config.canvas_size()
    );
    drawn
}
