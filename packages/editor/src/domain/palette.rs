use super::color::Color;

/// Swatches offered by a fresh editor, in display order.
/// `58aeee` appears twice in the stock swatch strip; the palette keeps one.
pub const DEFAULT_SWATCHES: [Color; 16] = [
    Color::hex(0xfafafa),
    Color::hex(0xd4d4d4),
    Color::hex(0x9d9d9d),
    Color::hex(0x4b4b4b),
    Color::hex(0xf9d381),
    Color::hex(0xeaaf4d),
    Color::hex(0xf9938a),
    Color::hex(0xe75952),
    Color::hex(0x9ad1f9),
    Color::hex(0x58aeee),
    Color::hex(0x58aeee),
    Color::hex(0x44c55b),
    Color::hex(0xc3a7e1),
    Color::hex(0x9569c8),
    Color::hex(0xbab5aa),
    Color::hex(0x948e82),
];

pub const DEFAULT_CURRENT: Color = Color::hex(0xeaaf4d);

/// Ordered list of distinct colors with exactly one selected.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
    current: usize,
}

impl Palette {
    /// Build a palette, dropping repeated colors. Returns `None` for an empty list.
    /// `current` falls back to the first swatch when it is not part of the list.
    pub fn new<I>(colors: I, current: Color) -> Option<Self>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut distinct: Vec<Color> = Vec::new();
        for color in colors {
            if !distinct.contains(&color) {
                distinct.push(color);
            }
        }
        if distinct.is_empty() {
            return None;
        }

        let current = distinct.iter().position(|c| *c == current).unwrap_or(0);
        Some(Self { colors: distinct, current })
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn current(&self) -> Color {
        self.colors[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Select a swatch by color. False when the color is unknown or already current.
    pub fn select(&mut self, color: Color) -> bool {
        match self.colors.iter().position(|c| *c == color) {
            Some(idx) => self.select_index(idx),
            None => false,
        }
    }

    pub fn select_index(&mut self, idx: usize) -> bool {
        if idx >= self.colors.len() || idx == self.current {
            return false;
        }
        self.current = idx;
        true
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut colors: Vec<Color> = Vec::with_capacity(DEFAULT_SWATCHES.len());
        for color in DEFAULT_SWATCHES {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        let current = colors.iter().position(|c| *c == DEFAULT_CURRENT).unwrap_or(0);
        Self { colors, current }
    }
}
