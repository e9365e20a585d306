pub mod mapper;
pub mod palette;
pub mod rgb;

pub use mapper::color_for;
pub use palette::{Palette, Scheme, UnknownScheme};
pub use rgb::{ParseColorError, Rgb, interpolate};
