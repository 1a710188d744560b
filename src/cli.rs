use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "read-beyond", version, about = "Translate text from images")]
pub struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Extract text from an image
    Ocr {
        image: PathBuf,
        /// Region to keep before upload, as X,Y,WIDTH,HEIGHT
        #[arg(long)]
        crop: Option<CropRegion>,
        /// Copy the extracted text to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Translate a piece of text
    Translate {
        text: String,
        /// Target language code, e.g. fr
        #[arg(long = "to")]
        target_language: String,
        /// Source language code; detected by the server when omitted
        #[arg(long = "from")]
        source_language: Option<String>,
        #[arg(long)]
        copy: bool,
    },
    /// Extract text from an image, then translate it
    Scan {
        image: PathBuf,
        #[arg(long = "to")]
        target_language: String,
        #[arg(long)]
        crop: Option<CropRegion>,
        #[arg(long)]
        copy: bool,
    },
    /// List supported languages, optionally filtered
    Languages { query: Option<String> },
    /// Show or change the saved theme
    Theme { action: Option<ThemeAction> },
    /// Print a random quote
    Quote,
}

impl Command {
    /// Commands that talk to the API get the banner.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Command::Ocr { .. } | Command::Translate { .. } | Command::Scan { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FromStr for CropRegion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts = value
            .split(',')
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| format!("invalid crop value '{}': {}", value, error))?;

        let [x, y, width, height] = parts[..] else {
            return Err(format!(
                "crop must be X,Y,WIDTH,HEIGHT, got {} values",
                parts.len()
            ));
        };

        if width == 0 || height == 0 {
            return Err("crop width and height must be greater than zero".to_string());
        }

        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl fmt::Display for CropRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
