//! Geometry types shared by the layout engine

use serde::{Deserialize, Serialize};

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Size of the window the view is mounted in.
///
/// Passed in explicitly at construction and on every resize; the layout
/// engine never queries the platform for it.
pub type Viewport = Size;
