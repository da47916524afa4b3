use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("expected 6 or 8 hex digits, got {0:?}")]
    InvalidLength(String),

    #[error("invalid hex digits in {0:?}")]
    InvalidDigits(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    /// System blue, the fill used when no palette is given.
    fn default() -> Self {
        Self::rgb(0, 122, 255)
    }
}

impl Rgba {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`; the `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorError::InvalidLength(hex.to_string()));
        }
        // from_str_radix alone would accept a leading sign
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigits(hex.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::InvalidDigits(hex.to_string()))?;
        Ok(if digits.len() == 6 {
            Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
        } else {
            Self::rgba(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// The colors tiles cycle through, in drawing order. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPalette")]
pub struct Palette {
    colors: Vec<Rgba>,
}

/// Serialized shape of a [`Palette`] before the empty-list fallback.
#[derive(Deserialize)]
struct RawPalette {
    colors: Vec<Rgba>,
}

impl From<RawPalette> for Palette {
    fn from(raw: RawPalette) -> Self {
        Self::new(raw.colors)
    }
}

impl Palette {
    /// An empty list falls back to a single default color.
    pub fn new(colors: Vec<Rgba>) -> Self {
        if colors.is_empty() {
            log::warn!("empty fill color pattern, using the default color");
            return Self::single(Rgba::default());
        }
        Self { colors }
    }

    pub fn single(color: Rgba) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Parse a list of hex strings, failing on the first malformed one.
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, ColorError> {
        let colors = hex
            .iter()
            .map(|h| Rgba::from_hex(h.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(colors))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// Color for a pattern index; indices wrap around the palette.
    pub fn color(&self, index: usize) -> Rgba {
        self.colors
            .get(index % self.colors.len().max(1))
            .copied()
            .unwrap_or_default()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::single(Rgba::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgba::from_hex("#FF8000").unwrap(), Rgba::rgb(255, 128, 0));
        assert_eq!(Rgba::from_hex("10203040").unwrap(), Rgba::rgba(16, 32, 48, 64));
        assert!(matches!(Rgba::from_hex("#FFF"), Err(ColorError::InvalidLength(_))));
        assert!(matches!(Rgba::from_hex("#GGGGGG"), Err(ColorError::InvalidDigits(_))));
        assert!(matches!(Rgba::from_hex("#+FFFFF"), Err(ColorError::InvalidDigits(_))));
        assert!(matches!(Rgba::from_hex("+FFFFFFF"), Err(ColorError::InvalidDigits(_))));
    }

    #[test]
    fn test_deserialized_palette_is_never_empty() {
        let p: Palette = serde_json::from_str(r#"{ "colors": [] }"#).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.color(0), Rgba::default());

        let json = serde_json::to_string(&Palette::new(vec![Rgba::rgb(1, 2, 3)])).unwrap();
        let p: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(p.colors(), &[Rgba::rgb(1, 2, 3)]);
    }

    #[test]
    fn test_to_f32_array() {
        let c = Rgba::rgba(255, 0, 51, 255).to_f32_array();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 1e-6);
        assert_eq!(c[3], 1.0);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let p = Palette::new(Vec::new());
        assert_eq!(p.len(), 1);
        assert_eq!(p.color(5), Rgba::default());
    }

    #[test]
    fn test_palette_wraps() {
        let p = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
        assert_eq!(p.color(0), Rgba::rgb(0, 0, 0));
        assert_eq!(p.color(3), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::rgb(1, 2, 3).to_hex(), "#010203FF");
    }
}
