// SPDX-License-Identifier: MPL-2.0
//! Loading and saving the notification style from a `toasts.toml` file.
//!
//! The file has three optional sections; anything missing keeps its
//! default, and out-of-range values are clamped when converted with
//! [`Config::to_style`].
//!
//! ```toml
//! [colors]
//! success = [0.11, 0.63, 0.38, 1.0]
//!
//! [layout]
//! padding_x = 24.0
//! render_limit = 3
//!
//! [timing]
//! fade_in_ms = 150
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use toastline::config;
//! use toastline::ui::notifications::Manager;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let manager = Manager::with_style(config.to_style());
//! ```

pub mod defaults;

use crate::domain::{AnimationDuration, RenderLimit};
use crate::error::{Error, Result};
use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::notifications::Style;
use defaults::{
    APP_DIR, CONFIG_DIR_ENV, CONFIG_FILE, MAX_BORDER_WIDTH, MAX_PADDING, MAX_TOAST_WIDTH,
    MIN_PADDING, MIN_TOAST_WIDTH,
};
use iced_core::Color;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `toasts.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorsConfig,
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
}

/// `[colors]`: RGBA components in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub success: [f32; 4],
    pub warning: [f32; 4],
    pub error: [f32; 4],
    pub info: [f32; 4],
    pub title_background: [f32; 4],
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            success: rgba(palette::SUCCESS),
            warning: rgba(palette::WARNING),
            error: rgba(palette::ERROR),
            info: rgba(palette::INFO),
            title_background: rgba(palette::TITLE_BACKGROUND),
        }
    }
}

/// `[layout]`: pixels, except `render_limit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub padding_x: f32,
    pub padding_y: f32,
    pub padding_between: f32,
    pub min_width: f32,
    pub border_width: f32,
    pub render_limit: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding_x: spacing::PADDING_X,
            padding_y: spacing::PADDING_Y,
            padding_between: spacing::BETWEEN,
            min_width: sizing::MIN_WIDTH,
            border_width: sizing::BORDER_WIDTH,
            render_limit: RenderLimit::default().value(),
        }
    }
}

/// `[timing]`: milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub fade_in_ms: u64,
    pub fade_out_ms: u64,
    pub change_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let default_ms = AnimationDuration::default().millis();
        Self {
            fade_in_ms: default_ms,
            fade_out_ms: default_ms,
            change_ms: default_ms,
        }
    }
}

impl Config {
    /// Builds the engine style, clamping every value into its valid range.
    #[must_use]
    pub fn to_style(&self) -> Style {
        let layout = &self.layout;
        Style {
            color_success: color(self.colors.success),
            color_warning: color(self.colors.warning),
            color_error: color(self.colors.error),
            color_info: color(self.colors.info),
            color_title_background: color(self.colors.title_background),
            padding_x: clamp(layout.padding_x, MIN_PADDING, MAX_PADDING),
            padding_y: clamp(layout.padding_y, MIN_PADDING, MAX_PADDING),
            padding_between: clamp(layout.padding_between, MIN_PADDING, MAX_PADDING),
            min_width: clamp(layout.min_width, MIN_TOAST_WIDTH, MAX_TOAST_WIDTH),
            border_width: clamp(layout.border_width, 0.0, MAX_BORDER_WIDTH),
            fade_in: AnimationDuration::from_millis(self.timing.fade_in_ms).as_duration(),
            fade_out: AnimationDuration::from_millis(self.timing.fade_out_ms).as_duration(),
            change_duration: AnimationDuration::from_millis(self.timing.change_ms).as_duration(),
            render_limit: RenderLimit::new(layout.render_limit),
        }
    }

    /// Captures a style so it can be written back to disk.
    #[must_use]
    pub fn from_style(style: &Style) -> Self {
        let millis = |d: Duration| AnimationDuration::from(d).millis();
        Self {
            colors: ColorsConfig {
                success: rgba(style.color_success),
                warning: rgba(style.color_warning),
                error: rgba(style.color_error),
                info: rgba(style.color_info),
                title_background: rgba(style.color_title_background),
            },
            layout: LayoutConfig {
                padding_x: style.padding_x,
                padding_y: style.padding_y,
                padding_between: style.padding_between,
                min_width: style.min_width,
                border_width: style.border_width,
                render_limit: style.render_limit.value(),
            },
            timing: TimingConfig {
                fade_in_ms: millis(style.fade_in),
                fade_out_ms: millis(style.fade_out),
                change_ms: millis(style.change_duration),
            },
        }
    }
}

fn rgba(color: Color) -> [f32; 4] {
    [color.r, color.g, color.b, color.a]
}

fn color([r, g, b, a]: [f32; 4]) -> Color {
    let unit = |c: f32| clamp(c, 0.0, 1.0);
    Color::from_rgba(unit(r), unit(g), unit(b), unit(a))
}

/// Clamps, mapping NaN to the lower bound.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Resolves the configuration file path.
///
/// `TOASTLINE_CONFIG_DIR` wins over the platform config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_DIR);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields the defaults, and an unreadable or
/// invalid one yields the defaults plus a warning message for the caller.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_from(None)
}

/// Like [`load`], reading `path` instead of the default location when set.
#[must_use]
pub fn load_from(path: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!(
                "Ignoring {}, using default notification style. {}",
                path.display(),
                err
            )),
        ),
    }
}

/// Reads and parses one configuration file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default location.
///
/// # Errors
///
/// Returns an error if no config directory can be determined or the
/// file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    let path = default_config_path()
        .ok_or_else(|| Error::Config("no configuration directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Writes the configuration to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
