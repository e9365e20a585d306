use crate::color::{Palette, color_for};
use crate::report::size::parse_line;
use std::borrow::Cow;
use tracing::debug;

/// Wrap the size field of a report line in `[#rrggbb]...[/#rrggbb]` markup.
///
/// Lines that cannot be parsed, and every line when `palette` is `None`,
/// come back unchanged.
pub fn format_line<'a>(
    line: &'a str,
    palette: Option<&Palette>,
) -> Cow<'a, str> {
    let Some(palette) = palette else {
        return Cow::Borrowed(line);
    };
    match parse_line(line) {
        Ok(parsed) => {
            let color = color_for(parsed.bytes, palette);
            Cow::Owned(format!(
                "[{color}]{size}[/{color}]\t{item}",
                size = parsed.size,
                item = parsed.item
            ))
        }
        Err(e) => {
            debug!("passing line through unchanged: {e}");
            Cow::Borrowed(line)
        }
    }
}
