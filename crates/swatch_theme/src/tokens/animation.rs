//! Animation duration tokens

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Semantic animation token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationToken {
    Fast,
    Normal,
    Slow,
    Slower,
}

impl AnimationToken {
    pub const ALL: [AnimationToken; 4] = [
        AnimationToken::Fast,
        AnimationToken::Normal,
        AnimationToken::Slow,
        AnimationToken::Slower,
    ];
}

/// Complete set of animation durations (milliseconds)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationTokens {
    pub fast: u32,
    pub normal: u32,
    pub slow: u32,
    pub slower: u32,
}

impl AnimationTokens {
    /// Get duration in milliseconds by token key
    pub fn get(&self, token: AnimationToken) -> u32 {
        match token {
            AnimationToken::Fast => self.fast,
            AnimationToken::Normal => self.normal,
            AnimationToken::Slow => self.slow,
            AnimationToken::Slower => self.slower,
        }
    }

    pub fn duration(&self, token: AnimationToken) -> Duration {
        Duration::from_millis(u64::from(self.get(token)))
    }

    /// Zero-length durations, for reduced-motion themes
    pub fn instant() -> Self {
        Self {
            fast: 0,
            normal: 0,
            slow: 0,
            slower: 0,
        }
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            fast: 150,
            normal: 250,
            slow: 350,
            slower: 500,
        }
    }
}
