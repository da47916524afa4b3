//! # Polytile Renderer
//!
//! Turns a tiling configuration into serializable render data: one filled
//! polygon per visible tile with its palette color resolved. Host canvases
//! consume the resulting [`RenderFrame`].

pub mod palette;
pub mod render_data;

pub use palette::{ColorError, Palette, Rgba};
pub use render_data::{build_frame, RenderFrame, RenderTile};
