//! Legacy Chat Colors
//!
//! The fixed 16-color palette addressed by the codes `0`-`9` and `a`-`f`.

use serde::{Deserialize, Serialize};

/// One of the 16 legacy chat colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl Default for LegacyColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LegacyColor {
    /// Color in effect at the start of every line and after a reset
    pub const DEFAULT: LegacyColor = LegacyColor::White;

    /// All colors in code order (`0` through `f`)
    pub const ALL: [LegacyColor; 16] = [
        LegacyColor::Black,
        LegacyColor::DarkBlue,
        LegacyColor::DarkGreen,
        LegacyColor::DarkAqua,
        LegacyColor::DarkRed,
        LegacyColor::DarkPurple,
        LegacyColor::Gold,
        LegacyColor::Gray,
        LegacyColor::DarkGray,
        LegacyColor::Blue,
        LegacyColor::Green,
        LegacyColor::Aqua,
        LegacyColor::Red,
        LegacyColor::LightPurple,
        LegacyColor::Yellow,
        LegacyColor::White,
    ];

    /// Look up a color by its code character. Case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        let index = code.to_ascii_lowercase().to_digit(16)?;
        Some(Self::ALL[index as usize])
    }

    /// The lowercase code character selecting this color
    pub fn code(self) -> char {
        // Discriminants follow code order, so the index is always a hex digit.
        char::from_digit(self as u32, 16).unwrap_or('f')
    }

    /// CSS hex value, uppercase as emitted in `style` attributes
    pub fn hex(self) -> &'static str {
        match self {
            LegacyColor::Black => "#000000",
            LegacyColor::DarkBlue => "#0000AA",
            LegacyColor::DarkGreen => "#00AA00",
            LegacyColor::DarkAqua => "#00AAAA",
            LegacyColor::DarkRed => "#AA0000",
            LegacyColor::DarkPurple => "#AA00AA",
            LegacyColor::Gold => "#FFAA00",
            LegacyColor::Gray => "#AAAAAA",
            LegacyColor::DarkGray => "#555555",
            LegacyColor::Blue => "#5555FF",
            LegacyColor::Green => "#55FF55",
            LegacyColor::Aqua => "#55FFFF",
            LegacyColor::Red => "#FF5555",
            LegacyColor::LightPurple => "#FF55FF",
            LegacyColor::Yellow => "#FFFF55",
            LegacyColor::White => "#FFFFFF",
        }
    }

    /// Convert to RGB components
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_digits_and_letters() {
        assert_eq!(LegacyColor::from_code('0'), Some(LegacyColor::Black));
        assert_eq!(LegacyColor::from_code('6'), Some(LegacyColor::Gold));
        assert_eq!(LegacyColor::from_code('c'), Some(LegacyColor::Red));
        assert_eq!(LegacyColor::from_code('f'), Some(LegacyColor::White));
    }

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(LegacyColor::from_code('C'), Some(LegacyColor::Red));
        assert_eq!(LegacyColor::from_code('E'), Some(LegacyColor::Yellow));
    }

    #[test]
    fn test_from_code_rejects_non_colors() {
        for code in ['g', 'l', 'r', 'k', 'z', '§', ' ', '٣'] {
            assert_eq!(LegacyColor::from_code(code), None, "code {code:?}");
        }
    }

    #[test]
    fn test_code_roundtrips_through_table() {
        for color in LegacyColor::ALL {
            assert_eq!(LegacyColor::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn test_hex_values() {
        assert_eq!(LegacyColor::DarkBlue.hex(), "#0000AA");
        assert_eq!(LegacyColor::Red.hex(), "#FF5555");
        assert_eq!(LegacyColor::DEFAULT.hex(), "#FFFFFF");
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(LegacyColor::Black.to_rgb(), (0, 0, 0));
        assert_eq!(LegacyColor::Gold.to_rgb(), (255, 170, 0));
        assert_eq!(LegacyColor::DarkGray.to_rgb(), (85, 85, 85));
    }
}
