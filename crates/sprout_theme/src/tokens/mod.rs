//! Design tokens
//!
//! Two tiers: the human-authored [`SeedToken`] and the derived global
//! [`Token`]. Component tokens live in [`crate::components`].

mod color;
mod global;
pub mod scale;
mod seed;
mod shadow;

pub use color::*;
pub use global::*;
pub use seed::*;
pub use shadow::*;
