// ABOUTME: Configuration module for the kidase-slides application
// ABOUTME: Provides default settings and environment variable handling

use crate::creator::SlideSettings;
use crate::pptx::{DEFAULT_SLIDE_HEIGHT, DEFAULT_SLIDE_WIDTH};
use crate::style::{Rgb, SlideStyle, MAX_FONT_SIZE_PT};
use log::warn;
use std::env;
use std::path::PathBuf;

/// Languages used when none are configured.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["ግእዝ", "ትግርኛ", "english"];

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output: PathBuf,
    pub languages: Vec<String>,
    pub style: SlideStyle,
    pub slide_width: u64,
    pub slide_height: u64,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            output: PathBuf::from("kidase.pptx"),
            languages: DEFAULT_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            style: SlideStyle::default(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    format!("Kidase {}", chrono::Local::now().format("%B %d, %Y"))
}

/// Split a comma-separated language list, dropping blanks.
pub fn parse_languages(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_color(name: &str, value: Option<String>, fallback: Rgb) -> Rgb {
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Ignoring {}: {}", name, e);
            fallback
        }),
        None => fallback,
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_dir = lookup("KIDASE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let output = lookup("KIDASE_OUTPUT")
            .map(PathBuf::from)
            .unwrap_or(defaults.output);
        let languages = lookup("KIDASE_LANGUAGES")
            .map(|s| parse_languages(&s))
            .filter(|langs| !langs.is_empty())
            .unwrap_or(defaults.languages);

        let font = lookup("KIDASE_FONT").unwrap_or(defaults.style.font);
        let font_size_pt = match lookup("KIDASE_FONT_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if (1..=MAX_FONT_SIZE_PT).contains(&size) => size,
                _ => {
                    warn!(
                        "Ignoring KIDASE_FONT_SIZE: '{}' is not a point size between 1 and {}",
                        raw, MAX_FONT_SIZE_PT
                    );
                    defaults.style.font_size_pt
                }
            },
            None => defaults.style.font_size_pt,
        };

        let style = SlideStyle {
            font,
            font_size_pt,
            font_color: parse_color(
                "KIDASE_FONT_COLOR",
                lookup("KIDASE_FONT_COLOR"),
                defaults.style.font_color,
            ),
            background_color: parse_color(
                "KIDASE_BACKGROUND_COLOR",
                lookup("KIDASE_BACKGROUND_COLOR"),
                defaults.style.background_color,
            ),
            border_color: parse_color(
                "KIDASE_BORDER_COLOR",
                lookup("KIDASE_BORDER_COLOR"),
                defaults.style.border_color,
            ),
            border_width_emu: defaults.style.border_width_emu,
        };

        Self {
            data_dir,
            output,
            languages,
            style,
            slide_width: defaults.slide_width,
            slide_height: defaults.slide_height,
            title: defaults.title,
        }
    }

    /// Get slide settings for the creator from this config
    pub fn slide_settings(&self, show_progress: bool) -> SlideSettings {
        SlideSettings {
            style: self.style.clone(),
            slide_width: self.slide_width,
            slide_height: self.slide_height,
            title: self.title.clone(),
            show_progress,
        }
    }
}
