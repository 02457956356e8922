//! Embedding options for the sketch pad.
//!
//! Options come from a camelCase JSON file and, on native builds, from command
//! line flags that override the file:
//!
//! ```json
//! {
//!   "canvasWidth": "100%",
//!   "canvasHeight": "calc(100vh - 77px)",
//!   "initialCanvasColor": "#ffffff",
//!   "customColorPalette": ["#112233", "rgba(0, 0, 0, 0.25)"]
//! }
//! ```
//!
//! Missing keys take their defaults.

use crate::color::ColorValue;
use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid canvas length {0:?}")]
    InvalidLength(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// What the relative part of a [`CanvasLength`] is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBasis {
    /// `%`: the area available to the canvas
    Container,
    /// `vw`: the window width
    ViewportWidth,
    /// `vh`: the window height
    ViewportHeight,
}

impl LengthBasis {
    fn unit(self) -> &'static str {
        match self {
            LengthBasis::Container => "%",
            LengthBasis::ViewportWidth => "vw",
            LengthBasis::ViewportHeight => "vh",
        }
    }
}

/// A CSS-like length: `N%`, `Nvw`, `Nvh`, `Npx`, `N`, or `calc(A + B)` / `calc(A - B)`
/// combining at most one relative term with pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CanvasLength {
    relative: f32,
    basis: LengthBasis,
    pixels: f32,
}

impl CanvasLength {
    pub fn percent(value: f32) -> Self {
        Self {
            relative: value,
            basis: LengthBasis::Container,
            pixels: 0.0,
        }
    }

    pub fn pixels(value: f32) -> Self {
        Self {
            relative: 0.0,
            basis: LengthBasis::Container,
            pixels: value,
        }
    }

    /// Resolves against the space the canvas may use and the window size.
    /// The result never exceeds `available`.
    pub fn resolve(&self, available: f32, viewport: Vec2) -> f32 {
        let base = match self.basis {
            LengthBasis::Container => available,
            LengthBasis::ViewportWidth => viewport.x,
            LengthBasis::ViewportHeight => viewport.y,
        };
        (base * self.relative / 100.0 + self.pixels).clamp(0.0, available.max(0.0))
    }
}

#[derive(Debug, Clone, Copy)]
enum Term {
    Relative(f32, LengthBasis),
    Pixels(f32),
}

fn parse_term(term: &str) -> Option<Term> {
    let term = term.trim();
    let number = |s: &str| s.trim().parse::<f32>().ok().filter(|n| n.is_finite());
    if let Some(value) = term.strip_suffix('%') {
        Some(Term::Relative(number(value)?, LengthBasis::Container))
    } else if let Some(value) = term.strip_suffix("vw") {
        Some(Term::Relative(number(value)?, LengthBasis::ViewportWidth))
    } else if let Some(value) = term.strip_suffix("vh") {
        Some(Term::Relative(number(value)?, LengthBasis::ViewportHeight))
    } else if let Some(value) = term.strip_suffix("px") {
        Some(Term::Pixels(number(value)?))
    } else {
        Some(Term::Pixels(number(term)?))
    }
}

impl FromStr for CanvasLength {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidLength(s.to_owned());
        let trimmed = s.trim();

        let Some(inner) = trimmed
            .strip_prefix("calc(")
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return match parse_term(trimmed).ok_or_else(invalid)? {
                Term::Relative(value, basis) => Ok(Self {
                    relative: value,
                    basis,
                    pixels: 0.0,
                }),
                Term::Pixels(value) => Ok(Self::pixels(value)),
            };
        };

        // CSS requires whitespace around the operator
        let (lhs, sign, rhs) = if let Some((lhs, rhs)) = inner.split_once(" - ") {
            (lhs, -1.0, rhs)
        } else if let Some((lhs, rhs)) = inner.split_once(" + ") {
            (lhs, 1.0, rhs)
        } else {
            return Err(invalid());
        };

        let lhs = parse_term(lhs).ok_or_else(invalid)?;
        let rhs = parse_term(rhs).ok_or_else(invalid)?;
        match (lhs, rhs) {
            (Term::Relative(value, basis), Term::Pixels(px)) => Ok(Self {
                relative: value,
                basis,
                pixels: sign * px,
            }),
            (Term::Pixels(px), Term::Relative(value, basis)) => Ok(Self {
                relative: sign * value,
                basis,
                pixels: px,
            }),
            (Term::Pixels(a), Term::Pixels(b)) => Ok(Self::pixels(a + sign * b)),
            (Term::Relative(..), Term::Relative(..)) => Err(invalid()),
        }
    }
}

impl TryFrom<String> for CanvasLength {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CanvasLength> for String {
    fn from(length: CanvasLength) -> Self {
        length.to_string()
    }
}

impl fmt::Display for CanvasLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.basis.unit();
        match (self.relative != 0.0, self.pixels != 0.0) {
            (true, true) => {
                let sign = if self.pixels < 0.0 { '-' } else { '+' };
                write!(f, "calc({}{} {} {}px)", self.relative, unit, sign, self.pixels.abs())
            }
            (true, false) => write!(f, "{}{}", self.relative, unit),
            (false, _) => write!(f, "{}px", self.pixels),
        }
    }
}

/// Options a container passes to the sketch pad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SketchConfig {
    pub canvas_width: CanvasLength,
    pub canvas_height: CanvasLength,
    /// Background the canvas starts with
    pub initial_canvas_color: ColorValue,
    /// Shown after the built-in colors
    pub custom_color_palette: Vec<ColorValue>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: CanvasLength::percent(100.0),
            canvas_height: CanvasLength {
                relative: 100.0,
                basis: LengthBasis::ViewportHeight,
                pixels: -77.0,
            },
            initial_canvas_color: ColorValue::new("#ffffff"),
            custom_color_palette: Vec::new(),
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Config a web page embeds in the canvas element's `data-sketch-config`
    /// attribute. A missing attribute or bad JSON leaves the defaults in place.
    pub fn from_embedded(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|json| !json.is_empty()) else {
            return Self::default();
        };
        Self::from_json(json).unwrap_or_else(|err| {
            log::error!("Ignoring embedded config: {}", err);
            Self::default()
        })
    }

    /// Canvas size inside `available`, for a window of size `viewport`
    pub fn canvas_size(&self, available: Vec2, viewport: Vec2) -> Vec2 {
        Vec2::new(
            self.canvas_width.resolve(available.x, viewport),
            self.canvas_height.resolve(available.y, viewport),
        )
    }
}

/// Command line flags of the native binary
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug, Default)]
#[command(name = "sketch-pad")]
#[command(version, about = "Freehand sketch pad with PNG export")]
pub struct CliArgs {
    /// JSON config file (camelCase keys)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<std::path::PathBuf>,

    /// Canvas width, e.g. "100%", "800px" or "calc(100vw - 40px)"
    #[arg(long, value_name = "LENGTH")]
    pub canvas_width: Option<CanvasLength>,

    /// Canvas height, e.g. "calc(100vh - 77px)"
    #[arg(long, value_name = "LENGTH")]
    pub canvas_height: Option<CanvasLength>,

    /// Initial canvas background color
    #[arg(long, value_name = "COLOR")]
    pub initial_canvas_color: Option<String>,

    /// Extra palette color, shown after the built-ins (repeatable)
    #[arg(long = "custom-color", value_name = "COLOR")]
    pub custom_colors: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl CliArgs {
    /// Loads the config file if one was given, then applies the flags on top
    pub fn into_config(self) -> ConfigResult<SketchConfig> {
        let mut config = match &self.config {
            Some(path) => SketchConfig::load(path)?,
            None => SketchConfig::default(),
        };
        if let Some(width) = self.canvas_width {
            config.canvas_width = width;
        }
        if let Some(height) = self.canvas_height {
            config.canvas_height = height;
        }
        if let Some(color) = self.initial_canvas_color {
            config.initial_canvas_color = ColorValue::new(color);
        }
        if !self.custom_colors.is_empty() {
            config.custom_color_palette = self.custom_colors.into_iter().map(ColorValue::new).collect();
        }
        Ok(config)
    }
}
