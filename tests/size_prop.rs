use colordu::constants::UNIT_SUFFIXES;
use colordu::report::{parse_size, unit_multiplier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn suffixed_size_is_number_times_unit_power(n in 0u32..100_000, idx in 0usize..UNIT_SUFFIXES.len()) {
        let unit = UNIT_SUFFIXES[idx];
        let bytes = parse_size(&format!("{n}{unit}")).unwrap();
        prop_assert_eq!(bytes, n as f64 * 1024f64.powi(idx as i32 + 1));
    }

    #[test]
    fn bare_size_is_kib_blocks(n in 0u64..1_000_000_000) {
        prop_assert_eq!(parse_size(&n.to_string()).unwrap(), n as f64 * 1024.0);
    }

    #[test]
    fn arbitrary_tokens_never_panic(token in "\\PC{0,12}") {
        let _ = parse_size(&token);
    }
}

#[test]
fn multipliers_strictly_increase_with_unit_position() {
    let multipliers: Vec<f64> = UNIT_SUFFIXES
        .iter()
        .map(|&u| unit_multiplier(u).unwrap())
        .collect();
    assert_eq!(multipliers[0], 1024.0);
    assert!(multipliers.windows(2).all(|w| w[1] == w[0] * 1024.0));
}
