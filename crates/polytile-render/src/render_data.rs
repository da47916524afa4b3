use polytile_core::tiling::ColorPatternCounter;
use polytile_core::{Tiler, TilingConfiguration};
use serde::{Deserialize, Serialize};

use crate::palette::{Palette, Rgba};

/// A tile ready for rendering as a filled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderTile {
    /// Position in the fill color pattern.
    pub color_index: usize,
    pub color: Rgba,
    /// Flat array of vertices: [x0, y0, x1, y1, ...]
    pub vertices: Vec<f64>,
    pub tile_x: i64,
    pub tile_y: i64,
}

/// Complete render frame for one canvas, in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// [`polytile_core::PolygonKind::id`] of the tiling that produced the frame.
    pub kind_id: String,
    pub tiles: Vec<RenderTile>,
}

impl RenderFrame {
    pub fn empty(config: &TilingConfiguration) -> Self {
        let size = config.canvas_size();
        Self {
            canvas_width: size.width,
            canvas_height: size.height,
            kind_id: config.kind().id(),
            tiles: Vec::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Tile the canvas described by `config` and resolve each tile's color.
///
/// Tiles and color indices come out in the same order as
/// [`polytile_core::draw_tiles`].
pub fn build_frame(config: &TilingConfiguration, palette: &Palette) -> RenderFrame {
    let mut frame = RenderFrame::empty(config);
    let tiler = Tiler::new(*config);
    let mut colors = ColorPatternCounter::new(palette.len());
    frame.tiles = tiler
        .tiles()
        .map(|tile| {
            let color_index = colors.next_index(&tile.layout.bounding_rect);
            RenderTile {
                color_index,
                color: palette.color(color_index),
                vertices: tile.path.to_flat_vertices(),
                tile_x: tile.tile_x,
                tile_y: tile.tile_y,
            }
        })
        .collect();

    log::debug!(
        "built frame of {} tiles for {}",
        frame.tiles.len(),
        frame.kind_id
    );
    frame
}
