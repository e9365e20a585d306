use crate::color::Rgb;
use crossterm::style::{Color, Stylize, style};
use std::borrow::Cow;

/// Turns leading `[#rrggbb]size[/#rrggbb]` markup into terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    /// 24-bit ANSI foreground colors.
    Ansi,
    /// Markup stripped, no escapes.
    Plain,
}

impl Renderer {
    /// Render one formatted line. Only markup at the very start of the line is
    /// interpreted; anything else, including bracketed text in paths, is left
    /// alone.
    pub fn render<'a>(
        &self,
        line: &'a str,
    ) -> Cow<'a, str> {
        let Some((color, text, rest)) = split_markup(line) else {
            return Cow::Borrowed(line);
        };
        match self {
            Renderer::Ansi => {
                let fg = Color::Rgb {
                    r: color.r,
                    g: color.g,
                    b: color.b,
                };
                Cow::Owned(format!("{}{rest}", style(text).with(fg)))
            }
            Renderer::Plain => Cow::Owned(format!("{text}{rest}")),
        }
    }
}

fn split_markup(line: &str) -> Option<(Rgb, &str, &str)> {
    let after_open = line.strip_prefix('[')?;
    let (tag, body) = after_open.split_once(']')?;
    let color: Rgb = tag.parse().ok()?;
    let close = format!("[/{tag}]");
    let (text, rest) = body.split_once(close.as_str())?;
    Some((color, text, rest))
}
