//! Scroll bindings
//!
//! A [`ScrollBinding`] ties an interpolation table to one of the two scroll
//! channels. Visual properties that only need to track the finger bind to
//! [`Channel::Fast`]; properties that must land on an exact endpoint at rest
//! (colors on platforms without reliable native color animation) bind to
//! [`Channel::Logic`].

use parallax_core::Channel;

use crate::interpolate::{InterpolationSpec, Lerp};

/// Both channel readings for one evaluation pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollInput {
    /// Raw offset from the fast channel
    pub fast: f32,
    /// Settled offset from the logic channel
    pub settled: f32,
}

impl ScrollInput {
    /// Same value on both channels (a view at rest)
    pub fn at_rest(offset: f32) -> Self {
        Self {
            fast: offset,
            settled: offset,
        }
    }

    pub fn for_channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Fast => self.fast,
            Channel::Logic => self.settled,
        }
    }
}

/// An interpolation table driven by one scroll channel
#[derive(Clone, Debug)]
pub struct ScrollBinding<T> {
    spec: InterpolationSpec<T>,
    channel: Channel,
}

impl<T: Lerp> ScrollBinding<T> {
    pub fn new(spec: InterpolationSpec<T>, channel: Channel) -> Self {
        Self { spec, channel }
    }

    /// Bind to the fast channel
    pub fn fast(spec: InterpolationSpec<T>) -> Self {
        Self::new(spec, Channel::Fast)
    }

    /// Bind to the logic channel
    pub fn logic(spec: InterpolationSpec<T>) -> Self {
        Self::new(spec, Channel::Logic)
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn spec(&self) -> &InterpolationSpec<T> {
        &self.spec
    }

    pub fn evaluate(&self, input: ScrollInput) -> T {
        self.spec.evaluate(input.for_channel(self.channel))
    }
}
