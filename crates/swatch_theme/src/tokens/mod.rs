//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Typography (font family, size, weight)
//! - Spacing (margins, padding)
//! - Elevation (shadows)
//! - Border radii
//! - Animation durations

mod animation;
mod color;
mod elevation;
mod radius;
mod spacing;
mod typography;

pub use animation::*;
pub use color::*;
pub use elevation::*;
pub use radius::*;
pub use spacing::*;
pub use typography::*;
