pub mod line;
pub mod size;

pub use line::format_line;
pub use size::{ParseError, ParsedLine, parse_line, parse_size, unit_multiplier};
