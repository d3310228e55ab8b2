//! Breakpoint interpolation
//!
//! An [`InterpolationSpec`] maps a scroll-derived input through an ordered
//! table of `(breakpoint, value)` stops. Between two stops the value is
//! interpolated by the fraction `(x - b_i) / (b_{i+1} - b_i)`, optionally
//! shaped by an [`Easing`]. Outside the table each side either clamps to the
//! nearest endpoint, extends the slope of the outermost segment, or passes
//! the input through unchanged.
//!
//! Evaluating exactly at a breakpoint always returns that stop's value, and a
//! clamped side always returns the endpoint value unmodified.
//!
//! # Example
//!
//! ```rust
//! use parallax_animation::InterpolationSpec;
//!
//! let opacity = InterpolationSpec::new([(0.0, 1.0), (200.0, 0.0)])
//!     .unwrap()
//!     .clamp();
//!
//! assert_eq!(opacity.evaluate(-50.0), 1.0);
//! assert_eq!(opacity.evaluate(100.0), 0.5);
//! assert_eq!(opacity.evaluate(400.0), 0.0);
//! ```

use parallax_core::Color;
use smallvec::SmallVec;
use thiserror::Error;

use crate::easing::Easing;

/// Error building an interpolation table
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// The table has no stops
    #[error("interpolation table has no stops")]
    Empty,

    /// Breakpoint `index` is not strictly greater than the one before it
    #[error("breakpoint {index} ({current}) is not greater than the previous breakpoint ({previous})")]
    NonIncreasing {
        index: usize,
        previous: f32,
        current: f32,
    },

    /// Breakpoint or output `index` is NaN or infinite
    #[error("stop {index} is not finite")]
    NonFinite { index: usize },
}

/// Result type for interpolation table construction
pub type Result<T> = std::result::Result<T, InterpolationError>;

/// Values that can be interpolated by a fraction
pub trait Lerp: Clone {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;

    /// Post-process a computed (possibly extrapolated) value
    fn finish(self) -> Self {
        self
    }

    /// Interpret a raw input as an output value, for identity extrapolation
    fn from_input(_x: f32) -> Option<Self> {
        None
    }

    fn is_finite(&self) -> bool;
}

impl Lerp for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }

    fn from_input(x: f32) -> Option<Self> {
        Some(x)
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

impl Lerp for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }

    /// Extrapolated channels cannot leave the displayable range
    fn finish(self) -> Self {
        self.clamped()
    }

    fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }
}

/// Behaviour outside the breakpoint table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment
    #[default]
    Extend,
    /// Hold the endpoint value
    Clamp,
    /// Return the input unchanged (numeric outputs only; clamps otherwise)
    Identity,
}

/// One breakpoint of a table
#[derive(Clone, Debug, PartialEq)]
pub struct Stop<T> {
    pub at: f32,
    pub value: T,
}

/// Immutable breakpoint table with homogeneous output type
#[derive(Clone, Debug)]
pub struct InterpolationSpec<T> {
    stops: SmallVec<[Stop<T>; 4]>,
    left: Extrapolate,
    right: Extrapolate,
    easing: Easing,
}

impl<T: Lerp> InterpolationSpec<T> {
    /// Build a table from `(breakpoint, value)` pairs.
    ///
    /// Breakpoints must be finite and strictly increasing. Both sides extend
    /// by default.
    pub fn new(stops: impl IntoIterator<Item = (f32, T)>) -> Result<Self> {
        let stops: SmallVec<[Stop<T>; 4]> = stops
            .into_iter()
            .map(|(at, value)| Stop { at, value })
            .collect();

        if stops.is_empty() {
            return Err(InterpolationError::Empty);
        }
        for (index, stop) in stops.iter().enumerate() {
            if !stop.at.is_finite() || !stop.value.is_finite() {
                return Err(InterpolationError::NonFinite { index });
            }
            if index > 0 {
                let previous = stops[index - 1].at;
                if stop.at <= previous {
                    return Err(InterpolationError::NonIncreasing {
                        index,
                        previous,
                        current: stop.at,
                    });
                }
            }
        }

        Ok(Self {
            stops,
            left: Extrapolate::Extend,
            right: Extrapolate::Extend,
            easing: Easing::Linear,
        })
    }

    /// Clamp on both sides
    pub fn clamp(mut self) -> Self {
        self.left = Extrapolate::Clamp;
        self.right = Extrapolate::Clamp;
        self
    }

    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.left = mode;
        self.right = mode;
        self
    }

    pub fn extrapolate_left(mut self, mode: Extrapolate) -> Self {
        self.left = mode;
        self
    }

    pub fn extrapolate_right(mut self, mode: Extrapolate) -> Self {
        self.right = mode;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn stops(&self) -> &[Stop<T>] {
        &self.stops
    }

    /// Input range covered by the table
    pub fn domain(&self) -> (f32, f32) {
        let first = self.stops[0].at;
        let last = self.stops[self.stops.len() - 1].at;
        (first, last)
    }

    /// Evaluate the table at `x`
    pub fn evaluate(&self, x: f32) -> T {
        let n = self.stops.len();
        if n == 1 {
            return self.stops[0].value.clone();
        }

        let first = &self.stops[0];
        let last = &self.stops[n - 1];

        if x < first.at {
            return self.outside(x, self.left, 0, first);
        }
        if x > last.at {
            return self.outside(x, self.right, n - 2, last);
        }

        // First stop strictly after x, minus one, is the segment start
        let upper = self.stops.partition_point(|s| s.at <= x);
        let i = upper.saturating_sub(1).min(n - 2);
        let (a, b) = (&self.stops[i], &self.stops[i + 1]);

        let t = (x - a.at) / (b.at - a.at);
        if t <= 0.0 {
            return a.value.clone();
        }
        if t >= 1.0 {
            return b.value.clone();
        }
        T::lerp(&a.value, &b.value, self.easing.apply(t)).finish()
    }

    fn outside(&self, x: f32, mode: Extrapolate, segment: usize, endpoint: &Stop<T>) -> T {
        match mode {
            Extrapolate::Clamp => endpoint.value.clone(),
            Extrapolate::Identity => T::from_input(x).unwrap_or_else(|| endpoint.value.clone()),
            Extrapolate::Extend => {
                let (a, b) = (&self.stops[segment], &self.stops[segment + 1]);
                let t = (x - a.at) / (b.at - a.at);
                T::lerp(&a.value, &b.value, t).finish()
            }
        }
    }
}

/// One-shot evaluation of `spec` at `x`
pub fn interpolate<T: Lerp>(spec: &InterpolationSpec<T>, x: f32) -> T {
    spec.evaluate(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_at_breakpoints() {
        let spec = InterpolationSpec::new([(-25.0, 1.1), (0.0, 1.0), (37.5, 0.7), (80.0, 0.3)])
            .unwrap();
        for stop in spec.stops() {
            assert_eq!(spec.evaluate(stop.at), stop.value);
        }
    }

    #[test]
    fn test_linear_between() {
        let spec = InterpolationSpec::new([(0.0, 0.0), (100.0, 50.0)]).unwrap();
        assert_eq!(spec.evaluate(50.0), 25.0);
        assert_eq!(spec.evaluate(10.0), 5.0);
    }

    #[test]
    fn test_extend_uses_outer_segment_slope() {
        let spec = InterpolationSpec::new([(0.0, 0.0), (10.0, 10.0), (20.0, 40.0)]).unwrap();
        assert_eq!(spec.evaluate(-5.0), -5.0);
        assert_eq!(spec.evaluate(25.0), 55.0);
    }

    #[test]
    fn test_clamp_both_sides() {
        let spec = InterpolationSpec::new([(0.0, 1.0), (200.0, 0.0)]).unwrap().clamp();
        assert_eq!(spec.evaluate(-1000.0), 1.0);
        assert_eq!(spec.evaluate(1000.0), 0.0);
    }

    #[test]
    fn test_mixed_extrapolation() {
        // Overscroll zoom: grows past the left edge, pinned on the right
        let scale = InterpolationSpec::new([(-25.0, 1.1), (0.0, 1.0)])
            .unwrap()
            .extrapolate_right(Extrapolate::Clamp);
        assert!((scale.evaluate(-50.0) - 1.2).abs() < 1e-6);
        assert_eq!(scale.evaluate(300.0), 1.0);
    }

    #[test]
    fn test_identity_extrapolation() {
        let spec = InterpolationSpec::new([(0.0, 0.0), (1.0, 2.0)])
            .unwrap()
            .extrapolate(Extrapolate::Identity);
        assert_eq!(spec.evaluate(7.0), 7.0);
        assert_eq!(spec.evaluate(-3.0), -3.0);

        let colors = InterpolationSpec::new([(0.0, Color::BLACK), (1.0, Color::WHITE)])
            .unwrap()
            .extrapolate(Extrapolate::Identity);
        assert_eq!(colors.evaluate(5.0), Color::WHITE);
    }

    #[test]
    fn test_single_stop_is_constant() {
        let spec = InterpolationSpec::new([(10.0, 3.0)]).unwrap();
        assert_eq!(spec.evaluate(-100.0), 3.0);
        assert_eq!(spec.evaluate(100.0), 3.0);
    }

    #[test]
    fn test_step_easing_holds_segment_start() {
        let spec = InterpolationSpec::new([(0.0, 0.0), (10.0, 1.0), (20.0, 2.0)])
            .unwrap()
            .with_easing(Easing::Step);
        assert_eq!(spec.evaluate(9.9), 0.0);
        assert_eq!(spec.evaluate(10.0), 1.0);
        assert_eq!(spec.evaluate(15.0), 1.0);
    }

    #[test]
    fn test_color_midpoint() {
        let spec = InterpolationSpec::new([(0.0, Color::BLACK), (200.0, Color::WHITE)])
            .unwrap()
            .clamp();
        assert_eq!(spec.evaluate(100.0).to_hex_string(), "#808080");
        assert_eq!(spec.evaluate(-10.0), Color::BLACK);
    }

    #[test]
    fn test_color_extension_is_clamped() {
        let spec = InterpolationSpec::new([(0.0, Color::BLACK), (100.0, Color::WHITE)]).unwrap();
        assert_eq!(spec.evaluate(300.0), Color::WHITE);
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert_eq!(
            InterpolationSpec::<f32>::new(Vec::new()).unwrap_err(),
            InterpolationError::Empty
        );
        assert!(matches!(
            InterpolationSpec::new([(0.0, 0.0), (0.0, 1.0)]),
            Err(InterpolationError::NonIncreasing { index: 1, .. })
        ));
        assert!(matches!(
            InterpolationSpec::new([(10.0, 0.0), (5.0, 1.0)]),
            Err(InterpolationError::NonIncreasing { index: 1, .. })
        ));
        assert!(matches!(
            InterpolationSpec::new([(0.0, 0.0), (f32::NAN, 1.0)]),
            Err(InterpolationError::NonFinite { index: 1 })
        ));
    }
}
