//! Base palettes for the built-in presets.
//!
//! Each palette only names the colors a designer picks by hand; the remaining
//! roles (outline variant, disabled, `on_*` status colors, the neutral ramp)
//! are derived in [`super::build_colors`].

use swatch_core::Color;

#[derive(Clone, Copy)]
pub(super) struct BasePalette {
    pub background: Color,
    pub surface: Color,
    pub surface_variant: Color,
    pub foreground: Color,
    pub muted_foreground: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub on_secondary: Color,
    pub outline: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub neutral_light: Color,
    pub neutral_dark: Color,
}

pub(super) fn light() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFFFFF),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xF1F3F5),
        foreground: Color::from_hex(0x1A1C1E),
        muted_foreground: Color::from_hex(0x5C6369),
        primary: Color::from_hex(0x1E5EDB),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x6B3FC4),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xC4C9CF),
        success: Color::from_hex(0x1B7F3B),
        warning: Color::from_hex(0xB25E00),
        error: Color::from_hex(0xC62828),
        info: Color::from_hex(0x0B6FA4),
        neutral_light: Color::from_hex(0xFAFAFA),
        neutral_dark: Color::from_hex(0x212121),
    }
}

pub(super) fn dark() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x121417),
        surface: Color::from_hex(0x1C1F23),
        surface_variant: Color::from_hex(0x2A2E33),
        foreground: Color::from_hex(0xE6E8EB),
        muted_foreground: Color::from_hex(0xA5ACB4),
        primary: Color::from_hex(0x8AB4F8),
        on_primary: Color::from_hex(0x0A1F44),
        secondary: Color::from_hex(0xC4A7FF),
        on_secondary: Color::from_hex(0x2A1060),
        outline: Color::from_hex(0x4A5058),
        success: Color::from_hex(0x5BD17F),
        warning: Color::from_hex(0xF5B94A),
        error: Color::from_hex(0xFF8A80),
        info: Color::from_hex(0x6CC7F5),
        neutral_light: Color::from_hex(0xF5F6F7),
        neutral_dark: Color::from_hex(0x17191C),
    }
}

pub(super) fn high_contrast() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x000000),
        surface: Color::from_hex(0x0A0A0A),
        surface_variant: Color::from_hex(0x1A1A1A),
        foreground: Color::from_hex(0xFFFFFF),
        muted_foreground: Color::from_hex(0xE0E0E0),
        primary: Color::from_hex(0xFFE600),
        on_primary: Color::from_hex(0x000000),
        secondary: Color::from_hex(0x00E5FF),
        on_secondary: Color::from_hex(0x000000),
        outline: Color::from_hex(0xFFFFFF),
        success: Color::from_hex(0x00FF66),
        warning: Color::from_hex(0xFFB000),
        error: Color::from_hex(0xFF5252),
        info: Color::from_hex(0x40C4FF),
        neutral_light: Color::from_hex(0xFFFFFF),
        neutral_dark: Color::from_hex(0x000000),
    }
}

pub(super) fn corporate() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xF7F8FA),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xE9ECF1),
        foreground: Color::from_hex(0x14213D),
        muted_foreground: Color::from_hex(0x4A5568),
        primary: Color::from_hex(0x0B3C7A),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x2F6F73),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xC7CDD6),
        success: Color::from_hex(0x22763A),
        warning: Color::from_hex(0xA35C00),
        error: Color::from_hex(0xB3261E),
        info: Color::from_hex(0x1F5F99),
        neutral_light: Color::from_hex(0xF8F9FB),
        neutral_dark: Color::from_hex(0x1A2233),
    }
}

pub(super) fn sunset() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFFF8F2),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xFBE9DC),
        foreground: Color::from_hex(0x2B1B17),
        muted_foreground: Color::from_hex(0x6B4F45),
        primary: Color::from_hex(0xC2410C),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x9D174D),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xE3C7B5),
        success: Color::from_hex(0x2F7D32),
        warning: Color::from_hex(0xB45309),
        error: Color::from_hex(0xB91C1C),
        info: Color::from_hex(0x1D6FA5),
        neutral_light: Color::from_hex(0xFDF8F4),
        neutral_dark: Color::from_hex(0x2A1F1A),
    }
}

pub(super) fn forest() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xF4F7F2),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xE3EBDD),
        foreground: Color::from_hex(0x1B2A1E),
        muted_foreground: Color::from_hex(0x4D5F4F),
        primary: Color::from_hex(0x2E6B34),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x6B4E2E),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xBFCCB8),
        success: Color::from_hex(0x2E7D32),
        warning: Color::from_hex(0x9A5B00),
        error: Color::from_hex(0xB3261E),
        info: Color::from_hex(0x22668A),
        neutral_light: Color::from_hex(0xF6F8F4),
        neutral_dark: Color::from_hex(0x1E261F),
    }
}

pub(super) fn ocean() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xF2F8FB),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xDDEDF4),
        foreground: Color::from_hex(0x0E2433),
        muted_foreground: Color::from_hex(0x3F5A6B),
        primary: Color::from_hex(0x006C8E),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x1E4E79),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xB3CAD6),
        success: Color::from_hex(0x1F7A4D),
        warning: Color::from_hex(0x9C5700),
        error: Color::from_hex(0xB42318),
        info: Color::from_hex(0x0A5C9E),
        neutral_light: Color::from_hex(0xF4F9FC),
        neutral_dark: Color::from_hex(0x12232E),
    }
}

pub(super) fn midnight() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0x0D1117),
        surface: Color::from_hex(0x161B22),
        surface_variant: Color::from_hex(0x21262D),
        foreground: Color::from_hex(0xE6EDF3),
        muted_foreground: Color::from_hex(0x9DA7B3),
        primary: Color::from_hex(0x58A6FF),
        on_primary: Color::from_hex(0x0D1117),
        secondary: Color::from_hex(0x3FB950),
        on_secondary: Color::from_hex(0x0D1117),
        outline: Color::from_hex(0x30363D),
        success: Color::from_hex(0x3FB950),
        warning: Color::from_hex(0xD29922),
        error: Color::from_hex(0xF85149),
        info: Color::from_hex(0x79C0FF),
        neutral_light: Color::from_hex(0xF0F6FC),
        neutral_dark: Color::from_hex(0x010409),
    }
}

pub(super) fn paper() -> BasePalette {
    BasePalette {
        background: Color::from_hex(0xFAFAF7),
        surface: Color::from_hex(0xFFFFFF),
        surface_variant: Color::from_hex(0xEFEFEA),
        foreground: Color::from_hex(0x222222),
        muted_foreground: Color::from_hex(0x5E5E5A),
        primary: Color::from_hex(0x333333),
        on_primary: Color::from_hex(0xFFFFFF),
        secondary: Color::from_hex(0x6E6E6A),
        on_secondary: Color::from_hex(0xFFFFFF),
        outline: Color::from_hex(0xD6D6D0),
        success: Color::from_hex(0x2E6B3A),
        warning: Color::from_hex(0x8A5A00),
        error: Color::from_hex(0xA4262C),
        info: Color::from_hex(0x2F5D8A),
        neutral_light: Color::from_hex(0xFAFAF7),
        neutral_dark: Color::from_hex(0x1C1C1A),
    }
}
