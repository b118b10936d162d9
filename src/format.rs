use std::{fmt, str::FromStr};

use clap::ValueEnum;

use crate::error::ParseColorError;

/// How the picked color is written out. Only affects text, never the color itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ColorFormat {
    #[default]
    Rgba,
    Hex,
    Hsla,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Rgba, ColorFormat::Hex, ColorFormat::Hsla];

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsla => "hsla",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseColorError::UnknownFormat(s.to_owned()))
    }
}
