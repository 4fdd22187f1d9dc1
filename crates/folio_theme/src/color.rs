use std::fmt;

/// An opaque sRGB color.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self::from_hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_formatting() {
        assert_eq!(Color::from_hex(0x1a1a2e).to_string(), "#1a1a2e");
        assert_eq!(Color::rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn parse_hex_accepts_optional_hash() {
        assert_eq!(Color::parse_hex("#FF5500"), Some(Color::rgb(0xff, 0x55, 0x00)));
        assert_eq!(Color::parse_hex("ff5500"), Some(Color::rgb(0xff, 0x55, 0x00)));
        assert_eq!(Color::parse_hex("#f50"), None);
        assert_eq!(Color::parse_hex("#gg5500"), None);
        assert_eq!(Color::parse_hex("+ff5500"), None);
    }
}
