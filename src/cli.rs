use clap::{Parser, ValueEnum};
use text_editor_core::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

/// A minimal text editor with find/replace and a light/dark theme.
#[derive(Debug, Parser)]
#[command(name = "text-editor", version, about)]
pub struct Cli {
    /// Theme applied at start-up
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    pub theme: ThemeArg,

    /// Initial window width in points
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,
}

impl Cli {
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.into()
    }
}
