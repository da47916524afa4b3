use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;
use crate::kind::PolygonKind;
use crate::stagger::StaggerEffect;

/// Tile width used when nothing else is specified.
pub const DEFAULT_TILE_WIDTH: f64 = 64.0;
/// Gap between neighbouring tiles when nothing else is specified.
pub const DEFAULT_INTER_TILE_SPACING: f64 = 2.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("fixed tile width must be positive and finite, got {0}")]
    InvalidTileWidth(f64),

    #[error("horizontal tile target must be positive and finite, got {0}")]
    InvalidHorizontalTarget(f64),

    #[error("inter-tile spacing must be non-negative and finite, got {0}")]
    InvalidSpacing(f64),

    #[error("rectangle width/height ratio must be positive and finite, got {0}")]
    InvalidRatio(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Either tiles of a fixed width (the count varies with the canvas) or a fixed
/// count per row (the width varies).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizingMode {
    FixedWidth(f64),
    HorizontalTarget(f64),
}

impl Default for SizingMode {
    fn default() -> Self {
        SizingMode::FixedWidth(DEFAULT_TILE_WIDTH)
    }
}

/// Everything one draw pass needs. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TilingConfiguration {
    kind: PolygonKind,
    sizing: SizingMode,
    inter_tile_spacing: f64,
    stagger: StaggerEffect,
    canvas_size: Size,
}

impl TilingConfiguration {
    pub fn builder() -> TilingConfigurationBuilder {
        TilingConfigurationBuilder::default()
    }

    pub fn kind(&self) -> PolygonKind {
        self.kind
    }

    pub fn sizing(&self) -> SizingMode {
        self.sizing
    }

    pub fn inter_tile_spacing(&self) -> f64 {
        self.inter_tile_spacing
    }

    pub fn stagger(&self) -> StaggerEffect {
        self.stagger
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Builder pre-filled with this configuration, e.g. to change the canvas
    /// size after a resize.
    pub fn to_builder(&self) -> TilingConfigurationBuilder {
        TilingConfigurationBuilder {
            kind: self.kind,
            sizing: self.sizing,
            inter_tile_spacing: self.inter_tile_spacing,
            stagger: self.stagger.amount(),
            canvas_size: self.canvas_size,
        }
    }

    // ── Serialization ────────────────────────────────────────────────

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a configuration document. An unreadable `kind`
    /// falls back to [`PolygonKind::fallback`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfiguration = serde_json::from_str(json)?;
        let kind = match serde_json::from_value::<PolygonKind>(raw.kind.clone()) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("unrecognised polygon kind {}: {e}", raw.kind);
                PolygonKind::fallback()
            }
        };
        TilingConfigurationBuilder {
            kind,
            sizing: raw.sizing,
            inter_tile_spacing: raw.inter_tile_spacing,
            stagger: raw.stagger.amount(),
            canvas_size: raw.canvas_size,
        }
        .build()
    }
}

impl Default for TilingConfiguration {
    fn default() -> Self {
        Self {
            kind: PolygonKind::default(),
            sizing: SizingMode::default(),
            inter_tile_spacing: DEFAULT_INTER_TILE_SPACING,
            stagger: StaggerEffect::ZERO,
            canvas_size: Size::ZERO,
        }
    }
}

/// On-disk shape of a configuration before validation.
#[derive(Debug, Deserialize)]
struct RawConfiguration {
    kind: serde_json::Value,
    #[serde(default)]
    sizing: SizingMode,
    #[serde(default = "default_spacing")]
    inter_tile_spacing: f64,
    #[serde(default)]
    stagger: StaggerEffect,
    #[serde(default)]
    canvas_size: Size,
}

fn default_spacing() -> f64 {
    DEFAULT_INTER_TILE_SPACING
}

/// Collects the parts of a [`TilingConfiguration`] and validates them once.
#[derive(Debug, Clone)]
pub struct TilingConfigurationBuilder {
    kind: PolygonKind,
    sizing: SizingMode,
    inter_tile_spacing: f64,
    stagger: f64,
    canvas_size: Size,
}

impl Default for TilingConfigurationBuilder {
    fn default() -> Self {
        TilingConfiguration::default().to_builder()
    }
}

impl TilingConfigurationBuilder {
    pub fn kind(mut self, kind: PolygonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn sizing(mut self, sizing: SizingMode) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn fixed_width(self, width: f64) -> Self {
        self.sizing(SizingMode::FixedWidth(width))
    }

    pub fn horizontal_target(self, count: f64) -> Self {
        self.sizing(SizingMode::HorizontalTarget(count))
    }

    pub fn inter_tile_spacing(mut self, spacing: f64) -> Self {
        self.inter_tile_spacing = spacing;
        self
    }

    /// Clamped by [`StaggerEffect::new`] at build time.
    pub fn stagger(mut self, amount: f64) -> Self {
        self.stagger = amount;
        self
    }

    pub fn canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_size = Size::new(width, height);
        self
    }

    pub fn build(self) -> Result<TilingConfiguration, ConfigError> {
        match self.sizing {
            SizingMode::FixedWidth(w) if !(w.is_finite() && w > 0.0) => {
                return Err(ConfigError::InvalidTileWidth(w));
            }
            SizingMode::HorizontalTarget(n) if !(n.is_finite() && n > 0.0) => {
                return Err(ConfigError::InvalidHorizontalTarget(n));
            }
            _ => {}
        }
        if !(self.inter_tile_spacing.is_finite() && self.inter_tile_spacing >= 0.0) {
            return Err(ConfigError::InvalidSpacing(self.inter_tile_spacing));
        }
        if let Some(ratio) = self.kind.width_to_height_ratio() {
            if !(ratio.is_finite() && ratio > 0.0) {
                return Err(ConfigError::InvalidRatio(ratio));
            }
        }

        // A collapsed or not-yet-laid-out canvas simply has nothing to tile.
        let non_negative = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let canvas_size = Size::new(
            non_negative(self.canvas_size.width),
            non_negative(self.canvas_size.height),
        );
        if canvas_size != self.canvas_size {
            log::warn!("canvas size {:?} clamped to {canvas_size:?}", self.canvas_size);
        }

        Ok(TilingConfiguration {
            kind: self.kind,
            sizing: self.sizing,
            inter_tile_spacing: self.inter_tile_spacing,
            stagger: StaggerEffect::new(self.stagger),
            canvas_size,
        })
    }
}
