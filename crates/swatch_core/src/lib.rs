//! Swatch Core
//!
//! Foundational value types shared by the Swatch crates:
//!
//! - **Color**: normalized RGBA with hex parsing, formatting and interpolation
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Color;
//!
//! let brand = Color::parse_hex("#1e5edb").unwrap();
//! assert_eq!(brand, Color::from_hex(0x1E5EDB));
//! assert_eq!(brand.to_hex_string(), "#1e5edb");
//!
//! let muted = Color::lerp(&brand, &Color::WHITE, 0.5);
//! assert!(muted.r > brand.r);
//! ```

pub mod color;
pub mod error;

pub use color::Color;
pub use error::ColorParseError;
