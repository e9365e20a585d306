//! Fixed color palettes and the name registry used to select one.
//!
//! Palettes come from Paul Tol's colour schemes
//! (<https://personal.sron.nl/~pault/data/colourschemes.pdf>).

use crate::color::Rgb;
use clap::ValueEnum;
use std::fmt;

/// Ordered, non-empty run of colors from coolest (small) to hottest (large).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Rgb],
}

impl Palette {
    pub const fn new(colors: &'static [Rgb]) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Never true for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(
        &self,
        index: usize,
    ) -> Option<Rgb> {
        self.colors.get(index).copied()
    }

    pub fn colors(&self) -> &'static [Rgb] {
        self.colors
    }

    pub fn first(&self) -> Rgb {
        self.colors[0]
    }

    pub fn last(&self) -> Rgb {
        self.colors[self.colors.len() - 1]
    }
}

const fn c(hex: u32) -> Rgb {
    Rgb::from_u32(hex)
}

pub const SUNSET: Palette = Palette::new(&[
    c(0x364B9A),
    c(0x4A7BB7),
    c(0x6EA6CD),
    c(0x98CAE1),
    c(0xC2E4EF),
    c(0xEAECCC),
    c(0xFEDA8B),
    c(0xFDB366),
    c(0xF67E4B),
    c(0xDD3D2D),
    c(0xA50026),
]);

pub const SMOOTH_RAINBOW: Palette = Palette::new(&[
    c(0xE8ECFB),
    c(0xDDD8EF),
    c(0xD1C1E1),
    c(0xC3A8D1),
    c(0xB58FC2),
    c(0xA778B4),
    c(0x9B62A7),
    c(0x8C4E99),
    c(0x6F4C9B),
    c(0x6059A9),
    c(0x5568B8),
    c(0x4E79C5),
    c(0x4D8AC6),
    c(0x4E96BC),
    c(0x549EB3),
    c(0x59A5A9),
    c(0x60AB9E),
    c(0x69B190),
    c(0x77B77D),
    c(0x8CBC68),
    c(0xA6BE54),
    c(0xBEBC48),
    c(0xD1B541),
    c(0xDDAA3C),
    c(0xE49C39),
    c(0xE78C35),
    c(0xE67932),
    c(0xE4632D),
    c(0xDF4828),
    c(0xDA2222),
    c(0xB8221E),
    c(0x95211B),
    c(0x721E17),
    c(0x521A13),
]);

// The three schemes below have one entry per unit letter K..Y.
pub const DISCRETE_RAINBOW: Palette = Palette::new(&[
    c(0x882E72),
    c(0x1965B0),
    c(0x7BAFDE),
    c(0x4EB265),
    c(0xCAE0AB),
    c(0xF7F056),
    c(0xEE8026),
    c(0xDC050C),
]);

pub const SEQUENTIAL_YLORBR: Palette = Palette::new(&[
    c(0xFFF7BC),
    c(0xFEE391),
    c(0xFEC44F),
    c(0xFB9A29),
    c(0xEC7014),
    c(0xCC4C02),
    c(0x993404),
    c(0x662506),
]);

pub const PARTIAL_SUNSET: Palette = Palette::new(&[
    c(0xFEDA8B),
    c(0xFDB366),
    c(0xF67E4B),
    c(0xDD3D2D),
    c(0xA50026),
    c(0xA50026),
    c(0xA50026),
    c(0xA50026),
]);

/// Registry of selectable color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Scheme {
    #[default]
    #[value(name = "SUNSET")]
    Sunset,
    #[value(name = "SMOOTH_RAINBOW")]
    SmoothRainbow,
    #[value(name = "DISCRETE_RAINBOW")]
    DiscreteRainbow,
    #[value(name = "SEQUENTIAL_YLORBR")]
    SequentialYlorbr,
    #[value(name = "PARTIAL_SUNSET")]
    PartialSunset,
    /// Coloring disabled.
    #[value(name = "NONE")]
    Disabled,
}

impl Scheme {
    /// Look a scheme up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, UnknownScheme> {
        <Self as ValueEnum>::from_str(name.trim(), true).map_err(|_| UnknownScheme {
            requested: name.to_string(),
            valid: Self::names(),
        })
    }

    /// Canonical names of every registered scheme, in registry order.
    pub fn names() -> Vec<String> {
        Self::value_variants()
            .iter()
            .filter_map(|s| s.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect()
    }

    pub fn name(self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    /// The palette for this scheme, or `None` when coloring is disabled.
    pub fn palette(self) -> Option<Palette> {
        match self {
            Scheme::Sunset => Some(SUNSET),
            Scheme::SmoothRainbow => Some(SMOOTH_RAINBOW),
            Scheme::DiscreteRainbow => Some(DISCRETE_RAINBOW),
            Scheme::SequentialYlorbr => Some(SEQUENTIAL_YLORBR),
            Scheme::PartialSunset => Some(PARTIAL_SUNSET),
            Scheme::Disabled => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScheme {
    pub requested: String,
    pub valid: Vec<String>,
}

impl fmt::Display for UnknownScheme {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "unknown color scheme {:?}; valid schemes are: {}",
            self.requested,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for UnknownScheme {}
