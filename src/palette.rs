use crate::color::ColorValue;

/// The fixed colors every sketch pad starts with, in display order
pub const BUILTIN_COLORS: [&str; 17] = [
    "#FF7F7F",
    "#FFBF00",
    "#80D880",
    "#fafafa",
    "#303030",
    "#F1C27D",
    "#64B5F6",
    "#FFB7C5",
    "#B39DDB",
    "#795548",
    "rgba(255, 255, 255, 0.5)",
    "rgba(255, 0, 0, 0.5)",
    "rgba(0, 128, 0, 0.5)",
    "rgba(0, 0, 0, 0.5)",
    "rgba(0, 0, 255, 0.5)",
    "rgba(255, 165, 0, 0.5)",
    "rgba(128, 0, 128, 0.5)",
];

/// Selectable colors, shown as `user_added ++ builtin ++ extra`.
///
/// Only `user_added` ever changes, and only by inserting at the front.
#[derive(Debug, Clone)]
pub struct Palette {
    user_added: Vec<ColorValue>,
    builtin: Vec<ColorValue>,
    extra: Vec<ColorValue>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Palette {
    /// Creates a palette with the built-in colors followed by `extra`
    pub fn new(extra: Vec<ColorValue>) -> Self {
        Self {
            user_added: Vec::new(),
            builtin: BUILTIN_COLORS.iter().copied().map(ColorValue::from).collect(),
            extra,
        }
    }

    /// Adds a custom color in front of every other entry. Duplicates are kept.
    pub fn push_user_color(&mut self, color: ColorValue) {
        self.user_added.insert(0, color);
    }

    /// Custom colors, most recent first
    pub fn user_added(&self) -> &[ColorValue] {
        &self.user_added
    }

    pub fn builtin(&self) -> &[ColorValue] {
        &self.builtin
    }

    pub fn extra(&self) -> &[ColorValue] {
        &self.extra
    }

    /// The first built-in color, used as the initial brush color
    pub fn default_color(&self) -> &ColorValue {
        &self.builtin[0]
    }

    /// All entries in display order
    pub fn entries(&self) -> impl Iterator<Item = &ColorValue> {
        self.user_added
            .iter()
            .chain(self.builtin.iter())
            .chain(self.extra.iter())
    }

    pub fn len(&self) -> usize {
        self.user_added.len() + self.builtin.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
