use crate::model::Dimensions;

/// Every assignment of item edges to the (height, width, length) box axes
const PERMUTATIONS: [(usize, usize, usize); 6] = [
    (0, 1, 2),
    (0, 2, 1),
    (1, 0, 2),
    (1, 2, 0),
    (2, 0, 1),
    (2, 1, 0),
];

/// Whether `item` fits inside `container` under some axis permutation
///
/// The item may be turned to align any of its edges with any box axis.
/// Only the extent is checked; nothing else in the container is considered.
pub fn fits(item: &Dimensions, container: &Dimensions) -> bool {
    let edges = item.edges();
    let [height, width, length] = container.edges();

    PERMUTATIONS
        .iter()
        .any(|&(h, w, l)| edges[h] <= height && edges[w] <= width && edges[l] <= length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn dims(h: Decimal, w: Decimal, l: Decimal) -> Dimensions {
        Dimensions::new(h, w, l)
    }

    #[test]
    fn test_fits_without_rotation() {
        assert!(fits(
            &dims(dec!(10), dec!(10), dec!(10)),
            &dims(dec!(30), dec!(40), dec!(80))
        ));
    }

    #[test]
    fn test_fits_only_after_rotation() {
        // 80 only fits along the box length
        assert!(fits(
            &dims(dec!(80), dec!(30), dec!(40)),
            &dims(dec!(30), dec!(40), dec!(80))
        ));
    }

    #[test]
    fn test_equal_edges_fit_exactly() {
        let extent = dims(dec!(30), dec!(40), dec!(80));
        assert!(fits(&extent, &extent));
    }

    #[test]
    fn test_rejects_when_one_edge_exceeds_every_axis() {
        assert!(!fits(
            &dims(dec!(81), dec!(1), dec!(1)),
            &dims(dec!(30), dec!(40), dec!(80))
        ));
    }

    #[test]
    fn test_rejects_when_no_permutation_works() {
        // Every edge fits the 80 axis, but none is short enough for the 30 axis
        assert!(!fits(
            &dims(dec!(35), dec!(38), dec!(39)),
            &dims(dec!(30), dec!(40), dec!(80))
        ));
    }

    fn edge() -> impl Strategy<Value = Decimal> {
        (1u32..=500u32, 0u32..=2u32).prop_map(|(mantissa, scale)| Decimal::new(mantissa.into(), scale))
    }

    proptest! {
        #[test]
        fn prop_fit_is_symmetric_in_item_edges(
            a in edge(), b in edge(), c in edge(),
            h in edge(), w in edge(), l in edge(),
        ) {
            let container = dims(h, w, l);
            let expected = fits(&dims(a, b, c), &container);

            for permuted in [
                dims(a, c, b),
                dims(b, a, c),
                dims(b, c, a),
                dims(c, a, b),
                dims(c, b, a),
            ] {
                prop_assert_eq!(fits(&permuted, &container), expected);
            }
        }

        #[test]
        fn prop_fit_matches_sorted_edge_comparison(
            a in edge(), b in edge(), c in edge(),
            h in edge(), w in edge(), l in edge(),
        ) {
            let mut item = [a, b, c];
            let mut container = [h, w, l];
            item.sort();
            container.sort();
            let sorted_fit = item.iter().zip(container.iter()).all(|(i, c)| i <= c);

            prop_assert_eq!(fits(&dims(a, b, c), &dims(h, w, l)), sorted_fit);
        }
    }
}
