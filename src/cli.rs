use std::ffi::OsString;

/// Arguments for the wrapped `du`, exactly as given on the command line.
///
/// colordu has no options of its own: `-h`, `--help` and `--` all belong to
/// du, so they are forwarded instead of being parsed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    pub du_args: Vec<OsString>,
}

impl Cli {
    pub fn parse() -> Self {
        Self::from_args(std::env::args_os().skip(1))
    }

    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            du_args: args.into_iter().map(Into::into).collect(),
        }
    }
}
