//! Color literals as the palette and the status strip show them.
//!
//! A [`ColorValue`] is kept as the literal string it was created from. Two values are
//! equal only when their strings are equal, so `#FF0000` and `#ff0000` are different
//! palette entries. Conversion to [`Color32`] happens only when something is painted.

use egui::Color32;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Painted in place of a literal that does not parse
pub const FALLBACK_COLOR: Color32 = Color32::BLACK;

/// A color literal: `#rrggbb` or `rgba(r, g, b, a)` with `a` in `[0, 1]`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(String);

impl ColorValue {
    pub fn new(literal: impl Into<String>) -> Self {
        Self(literal.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats a picker color the way the palette stores it.
    ///
    /// Opaque colors become lowercase hex, translucent ones an `rgba(...)` literal
    /// with the alpha rounded to two decimals.
    pub fn from_color32(color: Color32) -> Self {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        if a == u8::MAX {
            Self(format!("#{r:02x}{g:02x}{b:02x}"))
        } else {
            let alpha = (f32::from(a) / 255.0 * 100.0).round() / 100.0;
            Self(format!("rgba({r}, {g}, {b}, {alpha})"))
        }
    }

    /// Parses the literal, returning `None` for anything that is not a 6-digit hex
    /// code or a well-formed `rgba(...)` literal.
    pub fn to_color32(&self) -> Option<Color32> {
        let literal = self.0.trim();
        if let Some(hex) = literal.strip_prefix('#') {
            parse_hex(hex)
        } else {
            literal
                .strip_prefix("rgba(")
                .and_then(|rest| rest.strip_suffix(')'))
                .and_then(parse_rgba)
        }
    }

    /// Like [`Self::to_color32`] but never fails; unparseable literals are
    /// painted with [`FALLBACK_COLOR`]. Runs every frame, so it stays quiet.
    pub fn color32_or_fallback(&self) -> Color32 {
        self.to_color32().unwrap_or(FALLBACK_COLOR)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(literal: &str) -> Self {
        Self::new(literal)
    }
}

impl From<String> for ColorValue {
    fn from(literal: String) -> Self {
        Self(literal)
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn parse_rgba(body: &str) -> Option<Color32> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let [r, g, b, a] = parts.as_slice() else {
        return None;
    };
    let alpha: f32 = a.parse().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    Some(Color32::from_rgba_unmultiplied(
        r.parse().ok()?,
        g.parse().ok()?,
        b.parse().ok()?,
        (alpha * 255.0).round() as u8,
    ))
}
