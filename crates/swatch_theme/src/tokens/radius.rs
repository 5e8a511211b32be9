//! Border radius tokens for theming

use serde::{Deserialize, Serialize};

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusToken {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Full,
}

impl RadiusToken {
    pub const ALL: [RadiusToken; 8] = [
        RadiusToken::None,
        RadiusToken::Xs,
        RadiusToken::Sm,
        RadiusToken::Md,
        RadiusToken::Lg,
        RadiusToken::Xl,
        RadiusToken::Xxl,
        RadiusToken::Full,
    ];
}

/// Radius used for pill shapes
pub const RADIUS_FULL: f32 = 9999.0;

/// Complete set of border radius tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub none: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub full: f32,
}

impl RadiusTokens {
    /// Get radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::None => self.none,
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xxl => self.xxl,
            RadiusToken::Full => self.full,
        }
    }

    /// Square corners everywhere except pills
    pub fn sharp() -> Self {
        Self {
            none: 0.0,
            xs: 0.0,
            sm: 0.0,
            md: 0.0,
            lg: 0.0,
            xl: 0.0,
            xxl: 0.0,
            full: RADIUS_FULL,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            none: 0.0,
            xs: 2.0,
            sm: 4.0,
            md: 8.0,
            lg: 12.0,
            xl: 16.0,
            xxl: 24.0,
            full: RADIUS_FULL,
        }
    }
}
