use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry
const MAX_SCALE: u32 = 28;

/// Edge lengths of a rectangular extent
///
/// Values are exact decimals, so `volume()` is the exact product of the
/// three edges with no rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: Decimal,
    pub width: Decimal,
    pub length: Decimal,
}

impl Dimensions {
    pub fn new(height: Decimal, width: Decimal, length: Decimal) -> Self {
        Self {
            height,
            width,
            length,
        }
    }

    /// The three edges as `(height, width, length)`
    pub fn edges(&self) -> [Decimal; 3] {
        [self.height, self.width, self.length]
    }

    /// Exact product of the three edges
    ///
    /// `None` when the product overflows or would need more than 28
    /// fractional digits. `Decimal` multiplication rounds in the second
    /// case; a rounded product keeps a lower scale than the sum of the
    /// edge scales, which is how it is detected.
    pub fn checked_volume(&self) -> Option<Decimal> {
        let [h, w, l] = self.edges().map(|edge| edge.normalize());
        let exact_scale = h.scale() + w.scale() + l.scale();
        if exact_scale > MAX_SCALE {
            return None;
        }

        let volume = h.checked_mul(w)?.checked_mul(l)?;
        (volume.scale() == exact_scale).then_some(volume)
    }

    /// Exact product of the three edges
    ///
    /// Dimensions that pass `is_valid` always have an exact volume; anything
    /// else saturates at `Decimal::MAX`.
    pub fn volume(&self) -> Decimal {
        self.checked_volume().unwrap_or(Decimal::MAX)
    }

    /// True when every edge is strictly positive and the exact volume is
    /// representable and non-zero
    pub fn is_valid(&self) -> bool {
        self.edges()
            .iter()
            .all(|edge| edge.is_sign_positive() && !edge.is_zero())
            && self
                .checked_volume()
                .is_some_and(|volume| !volume.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_volume_is_exact_product() {
        let dims = Dimensions::new(dec!(25), dec!(35), dec!(75));
        assert_eq!(dims.volume(), dec!(65625));

        let fractional = Dimensions::new(dec!(0.1), dec!(0.2), dec!(0.3));
        assert_eq!(fractional.volume(), dec!(0.006));
    }

    #[test]
    fn test_rejects_non_positive_edges() {
        assert!(Dimensions::new(dec!(1), dec!(1), dec!(1)).is_valid());
        assert!(!Dimensions::new(dec!(0), dec!(1), dec!(1)).is_valid());
        assert!(!Dimensions::new(dec!(1), dec!(-2), dec!(1)).is_valid());
        assert!(!Dimensions::new(dec!(1), dec!(1), dec!(-0.5)).is_valid());
    }

    #[test]
    fn test_rejects_overflowing_volume() {
        let huge = Dimensions::new(Decimal::MAX, Decimal::MAX, dec!(2));
        assert!(huge.checked_volume().is_none());
        assert!(!huge.is_valid());
        assert_eq!(huge.volume(), Decimal::MAX);
    }

    #[test]
    fn test_rejects_volume_that_would_round_to_zero() {
        // 1e-30 exactly; Decimal would round the product to 0
        let edge = dec!(0.0000000001);
        let dust = Dimensions::new(edge, edge, edge);
        assert!(dust.checked_volume().is_none());
        assert!(!dust.is_valid());
    }

    #[test]
    fn test_rejects_volume_that_would_round() {
        // exact cube needs 39 fractional digits
        let edge = dec!(1.0000000000001);
        let dims = Dimensions::new(edge, edge, edge);
        assert!(dims.checked_volume().is_none());
        assert!(!dims.is_valid());
    }

    #[test]
    fn test_accepts_volume_at_full_scale() {
        let edge = dec!(0.0000000001);
        let dims = Dimensions::new(edge, edge, dec!(0.00000001));
        assert!(dims.is_valid());
        assert_eq!(dims.volume(), Decimal::new(1, 28));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_against_scale() {
        let edge = dec!(30.000000000000000000);
        let dims = Dimensions::new(edge, edge, edge);
        assert!(dims.is_valid());
        assert_eq!(dims.volume(), dec!(27000));
    }
}
