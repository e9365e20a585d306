use colordu::color::palette::SUNSET;
use colordu::color::{Rgb, color_for, interpolate};
use colordu::constants::{FALLBACK_COLOR, MAX_SIZE};
use proptest::prelude::*;

fn any_rgb() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

proptest! {
    #[test]
    fn interpolation_is_commutative(a in any_rgb(), b in any_rgb()) {
        prop_assert_eq!(interpolate(a, b), interpolate(b, a));
    }

    #[test]
    fn interpolation_of_a_color_with_itself_is_identity(a in any_rgb()) {
        prop_assert_eq!(interpolate(a, a), a);
    }

    #[test]
    fn interpolation_stays_between_channels(a in any_rgb(), b in any_rgb()) {
        let m = interpolate(a, b);
        prop_assert!(a.r.min(b.r) <= m.r && m.r <= a.r.max(b.r));
        prop_assert!(a.g.min(b.g) <= m.g && m.g <= a.g.max(b.g));
        prop_assert!(a.b.min(b.b) <= m.b && m.b <= a.b.max(b.b));
    }

    #[test]
    fn hex_display_parses_back(a in any_rgb()) {
        prop_assert_eq!(a.to_string().parse::<Rgb>().unwrap(), a);
    }

    #[test]
    fn sizes_past_max_saturate(extra in 0f64..1e20) {
        prop_assert_eq!(color_for(MAX_SIZE + extra, &SUNSET), FALLBACK_COLOR);
    }

    #[test]
    fn sizes_below_max_blend_adjacent_colors(bytes in 1f64..MAX_SIZE * 0.999) {
        let color = color_for(bytes, &SUNSET);
        let blends: Vec<Rgb> = SUNSET
            .colors()
            .windows(2)
            .map(|w| interpolate(w[0], w[1]))
            .collect();
        prop_assert!(blends.contains(&color));
    }
}
