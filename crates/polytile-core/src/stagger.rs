use serde::{Deserialize, Serialize};

/// Which dimension a tiling effect is applied along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EffectDimension {
    /// Reserved. No layout currently staggers along X.
    XAxis,
    #[default]
    YAxis,
}

/// Offsets each successive column by a fraction of the tile height, e.g. 0.5
/// for a brick-like pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaggerEffect {
    amount: f64,
    axis: EffectDimension,
}

impl StaggerEffect {
    pub const ZERO: StaggerEffect = StaggerEffect {
        amount: 0.0,
        axis: EffectDimension::YAxis,
    };

    /// Values outside `[0, 1)` are ignored and leave the tiling unstaggered.
    pub fn new(amount: f64) -> Self {
        let amount = if (0.0..1.0).contains(&amount) {
            amount
        } else {
            log::warn!("stagger amount {amount} outside [0, 1), using 0");
            0.0
        };
        Self {
            amount,
            axis: EffectDimension::YAxis,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn axis(&self) -> EffectDimension {
        self.axis
    }

    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

impl Default for StaggerEffect {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_amounts_clamp_to_zero() {
        assert_eq!(StaggerEffect::new(1.2).amount(), 0.0);
        assert_eq!(StaggerEffect::new(1.0).amount(), 0.0);
        assert_eq!(StaggerEffect::new(-0.1).amount(), 0.0);
        assert_eq!(StaggerEffect::new(f64::NAN).amount(), 0.0);
    }

    #[test]
    fn test_in_range_amount_kept() {
        let s = StaggerEffect::new(0.5);
        assert_eq!(s.amount(), 0.5);
        assert_eq!(s.axis(), EffectDimension::YAxis);
        assert!(!s.is_zero());
        assert!(StaggerEffect::ZERO.is_zero());
    }
}
