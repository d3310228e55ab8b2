//! Parallax Tabs Animation System
//!
//! Scroll-driven property animation.
//!
//! # Features
//!
//! - **Breakpoint Tables**: piecewise-linear or stepped mapping from a scroll
//!   offset to numbers or colors, with per-side clamping
//! - **Easing**: optional easing inside each table segment
//! - **Bindings**: a table attached to the fast or logic scroll channel

pub mod binding;
pub mod easing;
pub mod interpolate;

pub use binding::{ScrollBinding, ScrollInput};
pub use easing::Easing;
pub use interpolate::{interpolate, Extrapolate, InterpolationError, InterpolationSpec, Lerp, Stop};
