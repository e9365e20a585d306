pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod io;
pub mod pipeline;
pub mod report;

pub use color::{Palette, Rgb, Scheme};
pub use pipeline::Colorizer;
pub use report::{format_line, parse_line};
