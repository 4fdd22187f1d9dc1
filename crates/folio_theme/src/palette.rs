//! Semantic color tokens and the site's light/dark palettes.

use crate::color::Color;
use crate::scheme::ColorScheme;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    Primary,
    PrimaryHover,
    Accent,
    Background,
    Surface,
    TextPrimary,
    TextSecondary,
    Border,
    Success,
    Error,
}

impl ColorToken {
    pub const ALL: [ColorToken; 10] = [
        ColorToken::Primary,
        ColorToken::PrimaryHover,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::Border,
        ColorToken::Success,
        ColorToken::Error,
    ];

    /// CSS custom property name, without the leading `--`.
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::PrimaryHover => "primary-hover",
            ColorToken::Accent => "accent",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::Border => "border",
            ColorToken::Success => "success",
            ColorToken::Error => "error",
        }
    }
}

/// Complete set of semantic colors for one scheme
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub primary_hover: Color,
    pub accent: Color,
    pub background: Color,
    pub surface: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub success: Color,
    pub error: Color,
}

impl Palette {
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::Accent => self.accent,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Border => self.border,
            ColorToken::Success => self.success,
            ColorToken::Error => self.error,
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0x2563eb),
            primary_hover: Color::from_hex(0x1d4ed8),
            accent: Color::from_hex(0x0d9488),
            background: Color::from_hex(0xffffff),
            surface: Color::from_hex(0xf4f4f5),
            text_primary: Color::from_hex(0x18181b),
            text_secondary: Color::from_hex(0x52525b),
            border: Color::from_hex(0xe4e4e7),
            success: Color::from_hex(0x16a34a),
            error: Color::from_hex(0xdc2626),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0x60a5fa),
            primary_hover: Color::from_hex(0x93c5fd),
            accent: Color::from_hex(0x2dd4bf),
            background: Color::from_hex(0x09090b),
            surface: Color::from_hex(0x18181b),
            text_primary: Color::from_hex(0xfafafa),
            text_secondary: Color::from_hex(0xa1a1aa),
            border: Color::from_hex(0x27272a),
            success: Color::from_hex(0x4ade80),
            error: Color::from_hex(0xf87171),
        }
    }
}
