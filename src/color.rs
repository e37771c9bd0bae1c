use egui::Color32;

use crate::error::ColorParseError;

/// Chrome tint shown while erasing. Cells themselves receive [`Fill::Blank`].
pub const ERASE_TINT: Color32 = Color32::WHITE;

/// What a cell is filled with.
///
/// `Blank` is the background: a fresh cell and an erased cell are the same thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fill {
    #[default]
    Blank,
    Color(Color32),
}

impl Fill {
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// The color to draw, using `background` for blank cells
    pub fn resolve(&self, background: Color32) -> Color32 {
        match self {
            Self::Blank => background,
            Self::Color(color) => *color,
        }
    }
}

impl From<Color32> for Fill {
    fn from(color: Color32) -> Self {
        Self::Color(color)
    }
}

/// Parse `#rrggbb` style strings. The leading `#` is optional.
pub fn parse_hex(text: &str) -> Result<Color32, ColorParseError> {
    let trimmed = text.trim();
    let with_hash = if trimmed.starts_with('#') {
        trimmed.to_owned()
    } else {
        format!("#{trimmed}")
    };
    Color32::from_hex(&with_hash).map_err(|_| ColorParseError::InvalidHex(text.to_owned()))
}

/// The color the next paint operation applies.
///
/// `current` is what cells receive; `chrome` is what the surrounding
/// border and nav bar are tinted with. They only differ while erasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorState {
    current: Fill,
    chrome: Color32,
}

impl ColorState {
    pub fn new(initial: Color32) -> Self {
        Self {
            current: Fill::Color(initial),
            chrome: initial,
        }
    }

    pub fn current(&self) -> Fill {
        self.current
    }

    pub fn chrome(&self) -> Color32 {
        self.chrome
    }

    pub fn is_erasing(&self) -> bool {
        self.current.is_blank()
    }

    pub fn set_current(&mut self, color: Color32) {
        self.current = Fill::Color(color);
        self.chrome = color;
    }

    /// Switch to painting with the background
    pub fn erase(&mut self) {
        self.current = Fill::Blank;
        self.chrome = ERASE_TINT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_with_and_without_hash() {
        assert_eq!(parse_hex("#ff7552").unwrap(), Color32::from_rgb(0xff, 0x75, 0x52));
        assert_eq!(parse_hex("000000").unwrap(), Color32::BLACK);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_hex("#zzz"),
            Err(ColorParseError::InvalidHex("#zzz".to_owned()))
        );
    }

    #[test]
    fn erase_sets_blank_but_tints_white() {
        let mut state = ColorState::new(Color32::RED);
        state.erase();
        assert_eq!(state.current(), Fill::Blank);
        assert_eq!(state.chrome(), ERASE_TINT);
        assert!(state.is_erasing());

        state.set_current(Color32::BLUE);
        assert_eq!(state.current(), Fill::Color(Color32::BLUE));
        assert!(!state.is_erasing());
    }
}
