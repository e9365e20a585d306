// Centralized magic numbers & default values
use crate::color::Rgb;

/// Sizes at or above this many bytes saturate the palette (512 GiB).
pub const MAX_SIZE: f64 = 512.0 * 1024.0 * 1024.0 * 1024.0;

/// Bytes per block for bare numeric sizes; du's default block size is 1 KiB.
pub const BLOCK_SIZE: f64 = 1024.0;

/// Unit letters in increasing order; letter `i` means 1024^(i+1) bytes.
pub const UNIT_SUFFIXES: [char; 10] = ['K', 'M', 'G', 'T', 'P', 'E', 'Z', 'Y', 'R', 'Q'];

/// Used for sizes past the calibrated range and for zero sizes.
pub const FALLBACK_COLOR: Rgb = Rgb::from_u32(0x666666);

pub const DU_PROGRAM: &str = "du";

pub const SCHEME_ENV: &str = "COLORDU_COLORSCHEME";
pub const COLOR_ENV: &str = "COLORDU_COLOR";
pub const LOG_ENV: &str = "COLORDU_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
