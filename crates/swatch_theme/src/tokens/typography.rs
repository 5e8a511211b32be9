//! Typography tokens for theming

use serde::{Deserialize, Serialize};

/// Named steps of the type scale, largest first
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypographyToken {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

impl TypographyToken {
    pub const ALL: [TypographyToken; 15] = [
        TypographyToken::DisplayLarge,
        TypographyToken::DisplayMedium,
        TypographyToken::DisplaySmall,
        TypographyToken::HeadlineLarge,
        TypographyToken::HeadlineMedium,
        TypographyToken::HeadlineSmall,
        TypographyToken::TitleLarge,
        TypographyToken::TitleMedium,
        TypographyToken::TitleSmall,
        TypographyToken::BodyLarge,
        TypographyToken::BodyMedium,
        TypographyToken::BodySmall,
        TypographyToken::LabelLarge,
        TypographyToken::LabelMedium,
        TypographyToken::LabelSmall,
    ];

    /// The scale grouped by role, each group largest first
    pub const GROUPS: [[TypographyToken; 3]; 5] = [
        [
            TypographyToken::DisplayLarge,
            TypographyToken::DisplayMedium,
            TypographyToken::DisplaySmall,
        ],
        [
            TypographyToken::HeadlineLarge,
            TypographyToken::HeadlineMedium,
            TypographyToken::HeadlineSmall,
        ],
        [
            TypographyToken::TitleLarge,
            TypographyToken::TitleMedium,
            TypographyToken::TitleSmall,
        ],
        [
            TypographyToken::BodyLarge,
            TypographyToken::BodyMedium,
            TypographyToken::BodySmall,
        ],
        [
            TypographyToken::LabelLarge,
            TypographyToken::LabelMedium,
            TypographyToken::LabelSmall,
        ],
    ];

    pub fn name(self) -> &'static str {
        match self {
            TypographyToken::DisplayLarge => "display-large",
            TypographyToken::DisplayMedium => "display-medium",
            TypographyToken::DisplaySmall => "display-small",
            TypographyToken::HeadlineLarge => "headline-large",
            TypographyToken::HeadlineMedium => "headline-medium",
            TypographyToken::HeadlineSmall => "headline-small",
            TypographyToken::TitleLarge => "title-large",
            TypographyToken::TitleMedium => "title-medium",
            TypographyToken::TitleSmall => "title-small",
            TypographyToken::BodyLarge => "body-large",
            TypographyToken::BodyMedium => "body-medium",
            TypographyToken::BodySmall => "body-small",
            TypographyToken::LabelLarge => "label-large",
            TypographyToken::LabelMedium => "label-medium",
            TypographyToken::LabelSmall => "label-small",
        }
    }
}

/// Abstract font family reference, resolved by the host
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    System,
    Serif,
    Monospace,
    Rounded,
    /// A named family the host is expected to provide
    Custom(String),
}

/// Font weight on the CSS 100..=900 scale
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }
}

/// A single step of the type scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    #[serde(default)]
    pub family: FontFamily,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontDescriptor {
    pub fn new(family: FontFamily, size: f32, weight: FontWeight) -> Self {
        Self {
            family,
            size,
            weight,
        }
    }

    fn system(size: f32, weight: FontWeight) -> Self {
        Self::new(FontFamily::System, size, weight)
    }
}

/// Complete set of typography tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TypographyTokens {
    pub display_large: FontDescriptor,
    pub display_medium: FontDescriptor,
    pub display_small: FontDescriptor,
    pub headline_large: FontDescriptor,
    pub headline_medium: FontDescriptor,
    pub headline_small: FontDescriptor,
    pub title_large: FontDescriptor,
    pub title_medium: FontDescriptor,
    pub title_small: FontDescriptor,
    pub body_large: FontDescriptor,
    pub body_medium: FontDescriptor,
    pub body_small: FontDescriptor,
    pub label_large: FontDescriptor,
    pub label_medium: FontDescriptor,
    pub label_small: FontDescriptor,
}

impl TypographyTokens {
    /// Get a font descriptor by token key
    pub fn get(&self, token: TypographyToken) -> &FontDescriptor {
        match token {
            TypographyToken::DisplayLarge => &self.display_large,
            TypographyToken::DisplayMedium => &self.display_medium,
            TypographyToken::DisplaySmall => &self.display_small,
            TypographyToken::HeadlineLarge => &self.headline_large,
            TypographyToken::HeadlineMedium => &self.headline_medium,
            TypographyToken::HeadlineSmall => &self.headline_small,
            TypographyToken::TitleLarge => &self.title_large,
            TypographyToken::TitleMedium => &self.title_medium,
            TypographyToken::TitleSmall => &self.title_small,
            TypographyToken::BodyLarge => &self.body_large,
            TypographyToken::BodyMedium => &self.body_medium,
            TypographyToken::BodySmall => &self.body_small,
            TypographyToken::LabelLarge => &self.label_large,
            TypographyToken::LabelMedium => &self.label_medium,
            TypographyToken::LabelSmall => &self.label_small,
        }
    }

    /// Same scale with every step using `family`
    pub fn with_family(&self, family: FontFamily) -> Self {
        let mut tokens = self.clone();
        for descriptor in [
            &mut tokens.display_large,
            &mut tokens.display_medium,
            &mut tokens.display_small,
            &mut tokens.headline_large,
            &mut tokens.headline_medium,
            &mut tokens.headline_small,
            &mut tokens.title_large,
            &mut tokens.title_medium,
            &mut tokens.title_small,
            &mut tokens.body_large,
            &mut tokens.body_medium,
            &mut tokens.body_small,
            &mut tokens.label_large,
            &mut tokens.label_medium,
            &mut tokens.label_small,
        ] {
            descriptor.family = family.clone();
        }
        tokens
    }
}

impl Default for TypographyTokens {
    fn default() -> Self {
        use FontWeight::*;
        Self {
            display_large: FontDescriptor::system(57.0, Regular),
            display_medium: FontDescriptor::system(45.0, Regular),
            display_small: FontDescriptor::system(36.0, Regular),
            headline_large: FontDescriptor::system(32.0, SemiBold),
            headline_medium: FontDescriptor::system(28.0, SemiBold),
            headline_small: FontDescriptor::system(24.0, SemiBold),
            title_large: FontDescriptor::system(22.0, Medium),
            title_medium: FontDescriptor::system(16.0, Medium),
            title_small: FontDescriptor::system(14.0, Medium),
            body_large: FontDescriptor::system(16.0, Regular),
            body_medium: FontDescriptor::system(14.0, Regular),
            body_small: FontDescriptor::system(12.0, Regular),
            label_large: FontDescriptor::system(14.0, Medium),
            label_medium: FontDescriptor::system(12.0, Medium),
            label_small: FontDescriptor::system(11.0, Medium),
        }
    }
}
