//! Scroll threshold notification
//!
//! Fires an external callback with the active region index when the settled
//! scroll offset passes a fraction of that region's height. The first
//! crossing fires immediately; further crossings are suppressed until the
//! cooldown window has elapsed.

use std::time::{Duration, Instant};

/// Callback invoked with the active region index
pub type ThresholdCallback = Box<dyn FnMut(usize)>;

/// Last fire of a [`ThresholdNotifier`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThresholdState {
    pub last_fired_at: Option<Instant>,
    pub last_fired_tab: Option<usize>,
}

/// Debounced edge trigger on `offset / active_height > threshold`
pub struct ThresholdNotifier {
    threshold: f32,
    interval: Duration,
    state: ThresholdState,
    callback: Option<ThresholdCallback>,
}

impl ThresholdNotifier {
    pub fn new(threshold: f32, interval: Duration) -> Self {
        Self {
            threshold,
            interval,
            state: ThresholdState::default(),
            callback: None,
        }
    }

    pub fn set_callback<F: FnMut(usize) + 'static>(&mut self, f: F) {
        self.callback = Some(Box::new(f));
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn state(&self) -> ThresholdState {
        self.state
    }

    /// True while a cooldown window started at the last fire is open
    pub fn in_cooldown(&self, now: Instant) -> bool {
        self.state
            .last_fired_at
            .is_some_and(|at| now.saturating_duration_since(at) < self.interval)
    }

    /// Check a settled offset against the active region height.
    ///
    /// Returns whether the threshold fired. A zero or non-finite height skips
    /// the check. The cooldown starts on every fire, with or without a
    /// callback installed.
    pub fn on_settled_position_change(
        &mut self,
        value: f32,
        active_index: usize,
        active_height: f32,
        now: Instant,
    ) -> bool {
        if !(active_height.is_finite() && active_height > 0.0) {
            tracing::trace!(active_index, "no active height, threshold check skipped");
            return false;
        }
        let ratio = value / active_height;
        if !(ratio > self.threshold) {
            return false;
        }
        if self.in_cooldown(now) {
            tracing::trace!(active_index, ratio, "threshold crossing suppressed");
            return false;
        }

        self.state = ThresholdState {
            last_fired_at: Some(now),
            last_fired_tab: Some(active_index),
        };
        tracing::debug!(active_index, ratio, "scrolled past threshold");
        if let Some(callback) = self.callback.as_mut() {
            callback(active_index);
        }
        true
    }

    /// Forget the last fire so the next crossing fires immediately
    pub fn reset(&mut self) {
        self.state = ThresholdState::default();
    }

    /// Drop the callback and the open cooldown window
    pub fn release(&mut self) {
        self.callback = None;
        self.reset();
    }
}
