use crate::color::{Palette, Scheme};
use crate::io::render::Renderer;
use crate::report::format_line;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line-at-a-time colorizer for `du` output.
#[derive(Debug, Clone, Copy)]
pub struct Colorizer {
    palette: Option<Palette>,
    renderer: Renderer,
}

impl Colorizer {
    /// A plain renderer disables formatting altogether so output is the
    /// input byte for byte.
    pub fn new(
        scheme: Scheme,
        renderer: Renderer,
    ) -> Self {
        let palette = match renderer {
            Renderer::Ansi => scheme.palette(),
            Renderer::Plain => None,
        };
        debug!(scheme = %scheme.name(), ?renderer, enabled = palette.is_some(), "colorizer");
        Self { palette, renderer }
    }

    pub fn is_enabled(&self) -> bool {
        self.palette.is_some()
    }

    /// Colorize one line, without its terminator.
    pub fn colorize_line<'a>(
        &self,
        line: &'a str,
    ) -> Cow<'a, str> {
        if self.palette.is_none() {
            return Cow::Borrowed(line);
        }
        match format_line(line, self.palette.as_ref()) {
            Cow::Borrowed(unchanged) => Cow::Borrowed(unchanged),
            Cow::Owned(markup) => Cow::Owned(self.renderer.render(&markup).into_owned()),
        }
    }

    /// Copy `reader` to `writer`, colorizing each line as it arrives.
    ///
    /// Lines that are not UTF-8 are copied verbatim. Line terminators are kept
    /// as-is, including a missing one on the last line.
    pub fn colorize_stream<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let (body, terminator) = match buf.strip_suffix(b"\n") {
                Some(body) => (body, &b"\n"[..]),
                None => (&buf[..], &b""[..]),
            };
            match std::str::from_utf8(body) {
                Ok(line) => writer.write_all(self.colorize_line(line).as_bytes())?,
                Err(_) => {
                    debug!("passing non-UTF-8 line through unchanged");
                    writer.write_all(body)?;
                }
            }
            writer.write_all(terminator)?;
            writer.flush()?;
        }
        Ok(())
    }
}
