use std::{fs, io, path::Path};

use cfop_core::Color;
use clap::ValueEnum;
use color_eyre::eyre::{WrapErr, eyre};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// How large each sticker is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GridSize {
    #[default]
    Normal,
    Medium,
    Compact,
}

impl GridSize {
    /// Columns and rows of terminal cells per sticker
    pub fn cell(self) -> (usize, usize) {
        match self {
            GridSize::Normal => (6, 3),
            GridSize::Medium => (4, 2),
            GridSize::Compact => (2, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlashcardConfig {
    /// A random seed from `fastrand` is used when missing
    pub seed: Option<u64>,
    pub limit: Option<usize>,
}

/// Settings read from the TOML config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub front_color: Color,
    pub show_full: bool,
    pub grid_size: GridSize,
    pub flashcards: FlashcardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            front_color: Color::Blue,
            show_full: false,
            grid_size: GridSize::Normal,
            flashcards: FlashcardConfig::default(),
        }
    }
}

impl Config {
    /// Reads the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> color_eyre::Result<Config> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", path.display()));
            }
        };

        let config = Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> color_eyre::Result<Config> {
        let config = toml::from_str::<Config>(text)?;

        if !config.front_color.is_side() {
            return Err(eyre!(
                "The front color must be blue, red, green, or orange, not {}",
                config.front_color
            ));
        }

        Ok(config)
    }
}
