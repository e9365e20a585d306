use std::fmt;
use std::str::FromStr;

/// An sRGB color, formatted as lower-case `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(
        r: u8,
        g: u8,
        b: u8,
    ) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    pub input: String,
}

impl fmt::Display for ParseColorError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "invalid hex color {:?}, expected #rrggbb", self.input)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Accepts `#rrggbb` or `rrggbb`, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError {
            input: s.to_string(),
        };
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| err())?;
        Ok(Self::from_u32(packed))
    }
}

/// Per-channel midpoint of two colors, rounded down.
///
/// Symmetric in its arguments and never leaves the 0..=255 range.
pub fn interpolate(
    a: Rgb,
    b: Rgb,
) -> Rgb {
    Rgb {
        r: midpoint(a.r, b.r),
        g: midpoint(a.g, b.g),
        b: midpoint(a.b, b.b),
    }
}

fn midpoint(
    x: u8,
    y: u8,
) -> u8 {
    let (low, high) = if x <= y { (x, y) } else { (y, x) };
    low + (high - low) / 2
}
