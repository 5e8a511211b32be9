//! Elevation (shadow) tokens for theming

use serde::{Deserialize, Serialize};
use swatch_core::Color;

/// Semantic elevation token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationToken {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

impl ElevationToken {
    pub const ALL: [ElevationToken; 6] = [
        ElevationToken::Level0,
        ElevationToken::Level1,
        ElevationToken::Level2,
        ElevationToken::Level3,
        ElevationToken::Level4,
        ElevationToken::Level5,
    ];
}

/// A drop shadow definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Shadow {
    pub const fn new(color: Color, blur: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            color,
            blur,
            offset_x,
            offset_y,
        }
    }

    pub const fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Complete set of elevation tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationTokens {
    pub level0: Shadow,
    pub level1: Shadow,
    pub level2: Shadow,
    pub level3: Shadow,
    pub level4: Shadow,
    pub level5: Shadow,
}

impl ElevationTokens {
    /// Get shadow by token key
    pub fn get(&self, token: ElevationToken) -> &Shadow {
        match token {
            ElevationToken::Level0 => &self.level0,
            ElevationToken::Level1 => &self.level1,
            ElevationToken::Level2 => &self.level2,
            ElevationToken::Level3 => &self.level3,
            ElevationToken::Level4 => &self.level4,
            ElevationToken::Level5 => &self.level5,
        }
    }

    /// Create elevation tokens for a light color scheme
    pub fn light() -> Self {
        Self::with_opacity(0.08, 0.16)
    }

    /// Create elevation tokens for a dark color scheme
    pub fn dark() -> Self {
        Self::with_opacity(0.30, 0.50)
    }

    fn with_opacity(low: f32, high: f32) -> Self {
        // Quantized so the values survive a theme file round trip
        let shadow = |alpha: f32| Color::BLACK.with_alpha(alpha).quantized();
        Self {
            level0: Shadow::none(),
            level1: Shadow::new(shadow(low), 2.0, 0.0, 1.0),
            level2: Shadow::new(shadow(low), 4.0, 0.0, 2.0),
            level3: Shadow::new(shadow(low), 8.0, 0.0, 4.0),
            level4: Shadow::new(shadow(high), 16.0, 0.0, 8.0),
            level5: Shadow::new(shadow(high), 24.0, 0.0, 12.0),
        }
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self::light()
    }
}
