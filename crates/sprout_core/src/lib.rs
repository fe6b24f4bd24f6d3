//! Sprout Core
//!
//! Primitives shared by the Sprout theming crates:
//!
//! - **Color**: RGBA colors with hex parsing, blending, luma and HSV conversion
//! - **Subscribers**: observer registry used to publish state changes
//!
//! # Example
//!
//! ```
//! use sprout_core::Color;
//!
//! let brand: Color = "#1677ff".parse().unwrap();
//! let hover = brand.mix(Color::WHITE, 0.2);
//! assert!(hover.luma() > brand.luma());
//! ```

pub mod color;
pub mod subscribers;

pub use color::{Color, ColorParseError, Hsv};
pub use subscribers::{Listener, SubscriptionId, Subscribers};
