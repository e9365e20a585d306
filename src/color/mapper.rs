use crate::color::{Palette, Rgb, interpolate};
use crate::constants::{FALLBACK_COLOR, MAX_SIZE};

/// Pick a color for `bytes` on a log10 scale calibrated against [`MAX_SIZE`].
///
/// The log fraction is scaled into a palette index and the two colors
/// bracketing that index are blended. Sizes at or past `MAX_SIZE`, as well as
/// zero, negative and non-finite sizes, get [`FALLBACK_COLOR`]. Sizes so small
/// that the index falls below zero are clamped to the first pair of colors.
pub fn color_for(
    bytes: f64,
    palette: &Palette,
) -> Rgb {
    if !bytes.is_finite() || bytes <= 0.0 {
        return FALLBACK_COLOR;
    }
    let fraction = bytes.log10() / MAX_SIZE.log10();
    let len = palette.len() as isize;
    let index = (fraction * len as f64).floor() as isize - 1;
    if index + 1 >= len {
        return FALLBACK_COLOR;
    }
    let index = index.max(0) as usize;
    match (palette.get(index), palette.get(index + 1)) {
        (Some(low), Some(high)) => interpolate(low, high),
        // single-color palette
        (Some(only), None) => only,
        _ => FALLBACK_COLOR,
    }
}
