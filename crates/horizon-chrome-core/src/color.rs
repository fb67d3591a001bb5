//! 8-bit RGBA colors used by window chrome.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-premultiplied RGBA color with 8-bit channels.
///
/// Chrome colors end up in stylesheets and platform calls that both take
/// integer channels, so this type stays in `u8` space throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from RGBA components.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a 32-bit ARGB value (0xAARRGGBB).
    ///
    /// This is the layout of the colorization color delivered by the
    /// desktop window manager.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Convert to a 32-bit ARGB value (0xAARRGGBB).
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Create a color from a hex string (`#RRGGBB` or `#RRGGBBAA`).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is fully transparent.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Format as `#rrggbbaa`, keeping the alpha channel.
    pub fn to_hex_rgba(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Formats as `#rrggbb` for opaque colors and `#rrggbbaa` otherwise.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            f.write_str(&self.to_hex_rgba())
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color `{value}`"))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#336699"), Some(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(Color::from_hex("0000007f"), Some(Color::rgba(0, 0, 0, 0x7f)));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
    }

    #[test]
    fn test_from_argb() {
        let color = Color::from_argb(0xc4_33_66_99);
        assert_eq!(color, Color::rgba(0x33, 0x66, 0x99, 0xc4));
        assert_eq!(color.to_argb(), 0xc4_33_66_99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::rgb(0x70, 0x70, 0x70).to_string(), "#707070");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_transparent() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::WHITE.with_alpha(0).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }
}
