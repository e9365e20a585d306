use crate::cli::Cli;
use crate::color::Scheme;
use crate::constants::{COLOR_ENV, SCHEME_ENV};
use crate::io::render::Renderer;
use anyhow::Result;
use clap::ValueEnum;
use std::ffi::OsString;
use std::fmt;
use std::io::IsTerminal;

/// When to emit color escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Only when stdout is a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Look a mode up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<Self, InvalidColorMode> {
        <Self as ValueEnum>::from_str(name.trim(), true).map_err(|_| InvalidColorMode {
            requested: name.to_string(),
            valid: Self::value_variants()
                .iter()
                .filter_map(|m| m.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect(),
        })
    }

    pub fn renderer(
        self,
        stdout_is_terminal: bool,
        no_color: bool,
    ) -> Renderer {
        match self {
            ColorMode::Always => Renderer::Ansi,
            ColorMode::Never => Renderer::Plain,
            ColorMode::Auto if stdout_is_terminal && !no_color => Renderer::Ansi,
            ColorMode::Auto => Renderer::Plain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidColorMode {
    pub requested: String,
    pub valid: Vec<String>,
}

impl fmt::Display for InvalidColorMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "invalid {COLOR_ENV} value {:?}; expected one of: {}",
            self.requested,
            self.valid.join(", ")
        )
    }
}

impl std::error::Error for InvalidColorMode {}

/// Application configuration derived from the command line and environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub du_args: Vec<OsString>,
    pub scheme: Scheme,
    pub color: ColorMode,
    /// `NO_COLOR` was set to a non-empty value.
    pub no_color: bool,
}

impl Config {
    /// Build the config from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(Cli::parse(), |key| std::env::var(key).ok())
    }

    /// Build the config from `cli` and an environment lookup.
    ///
    /// Unknown scheme or color mode names are fatal, so this runs before du
    /// is started.
    pub fn resolve(
        cli: Cli,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let scheme = match non_empty(SCHEME_ENV) {
            Some(name) => Scheme::from_name(&name)?,
            None => Scheme::default(),
        };
        let color = match non_empty(COLOR_ENV) {
            Some(mode) => ColorMode::from_name(&mode)?,
            None => ColorMode::default(),
        };

        Ok(Config {
            du_args: cli.du_args,
            scheme,
            color,
            no_color: non_empty("NO_COLOR").is_some(),
        })
    }

    pub fn renderer(&self) -> Renderer {
        self.color
            .renderer(std::io::stdout().is_terminal(), self.no_color)
    }
}
