//! Two-channel scroll signal
//!
//! One state cell holds the scroll offset of a mounted view. Every scroll
//! event produces a single [`ScrollSample`] that is delivered on two channels:
//!
//! - **Fast**: bindings run immediately inside [`ScrollSignal::on_scroll_event`].
//!   They are `Send` so a host may forward them to a render thread, and they
//!   never read component state back.
//! - **Logic**: the same sample is queued and handed out by
//!   [`ScrollSignal::next_settled`] from the event loop. Reading it updates the
//!   settled position, which threshold and extent decisions are computed from.
//!
//! The settled position may lag the raw offset while samples are queued and
//! equals it once the queue is drained.
//!
//! The logic queue is bounded. Once it holds [`DEFAULT_PENDING_CAPACITY`]
//! samples (or the capacity given to [`ScrollSignal::with_capacity`]), each new
//! sample evicts the oldest queued one, except that the sample with the
//! largest offset is never evicted. The newest sample and the peak therefore
//! always reach the logic channel.
//!
//! # Example
//!
//! ```rust
//! use parallax_core::signal::ScrollSignal;
//!
//! let mut signal = ScrollSignal::new();
//! signal.on_scroll_event(120.0);
//! assert_eq!(signal.offset(), 120.0);
//! assert_eq!(signal.settled(), 0.0);
//!
//! while let Some(sample) = signal.next_settled() {
//!     assert_eq!(sample.offset, 120.0);
//! }
//! assert_eq!(signal.settled(), 120.0);
//! ```

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for a fast-channel binding
    pub struct BindingId;
    /// Handle for a logic-channel listener
    pub struct ListenerId;
}

/// Which channel a computation is driven from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Evaluated on every raw sample, no read-back into view state
    #[default]
    Fast,
    /// Evaluated from the settled position inside the event loop
    Logic,
}

/// One scroll offset observation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    /// Monotonic sequence number, identical on both channels
    pub seq: u64,
    pub offset: f32,
}

/// Logic samples held before the queue starts coalescing
pub const DEFAULT_PENDING_CAPACITY: usize = 64;

/// Fast-channel binding callback
pub type BindingFn = Box<dyn FnMut(ScrollSample) + Send>;

/// Logic-channel listener callback
pub type ListenerFn = Box<dyn FnMut(ScrollSample)>;

/// Scroll position state for one view instance
pub struct ScrollSignal {
    offset: f32,
    settled: f32,
    seq: u64,
    pending: VecDeque<ScrollSample>,
    capacity: usize,
    bindings: SlotMap<BindingId, BindingFn>,
    listeners: SlotMap<ListenerId, ListenerFn>,
    closed: bool,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PENDING_CAPACITY)
    }

    /// Signal whose logic queue holds at most `capacity` samples (at least 2)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            offset: 0.0,
            settled: 0.0,
            seq: 0,
            pending: VecDeque::with_capacity(capacity),
            capacity,
            bindings: SlotMap::with_key(),
            listeners: SlotMap::with_key(),
            closed: false,
        }
    }

    /// Current raw offset
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Offset last delivered on the logic channel
    pub fn settled(&self) -> f32 {
        self.settled
    }

    /// Sequence number of the most recent sample (0 before the first event)
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Number of samples not yet delivered on the logic channel
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Maximum number of queued logic samples
    pub fn pending_capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Record a new offset, run fast bindings, and queue the sample for the
    /// logic channel.
    ///
    /// Returns `None` (and changes nothing) for non-finite offsets or after
    /// [`close`](Self::close).
    pub fn on_scroll_event(&mut self, new_offset: f32) -> Option<ScrollSample> {
        if self.closed {
            tracing::warn!("scroll event after teardown ignored");
            return None;
        }
        if !new_offset.is_finite() {
            tracing::trace!(offset = new_offset, "non-finite scroll offset ignored");
            return None;
        }

        self.seq += 1;
        self.offset = new_offset;
        let sample = ScrollSample {
            seq: self.seq,
            offset: new_offset,
        };

        for (_, binding) in self.bindings.iter_mut() {
            binding(sample);
        }
        if self.pending.len() >= self.capacity {
            self.coalesce();
        }
        self.pending.push_back(sample);

        Some(sample)
    }

    /// Evict the oldest queued sample that is not the peak offset
    fn coalesce(&mut self) {
        let peak = self
            .pending
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.offset.total_cmp(&b.offset))
            .map(|(index, _)| index);
        let victim = if peak == Some(0) { 1 } else { 0 };
        if let Some(dropped) = self.pending.remove(victim) {
            tracing::trace!(
                seq = dropped.seq,
                offset = dropped.offset,
                "logic sample coalesced"
            );
        }
    }

    /// Deliver the oldest queued sample on the logic channel
    pub fn next_settled(&mut self) -> Option<ScrollSample> {
        let sample = self.pending.pop_front()?;
        self.settled = sample.offset;
        for (_, listener) in self.listeners.iter_mut() {
            listener(sample);
        }
        Some(sample)
    }

    /// Register a fast-channel binding
    pub fn bind<F: FnMut(ScrollSample) + Send + 'static>(&mut self, f: F) -> BindingId {
        self.bindings.insert(Box::new(f))
    }

    /// Register a logic-channel listener
    pub fn listen<F: FnMut(ScrollSample) + 'static>(&mut self, f: F) -> ListenerId {
        self.listeners.insert(Box::new(f))
    }

    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.bindings.remove(id).is_some()
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Release every subscription and stop accepting samples
    pub fn close(&mut self) {
        self.bindings.clear();
        self.listeners.clear();
        self.pending.clear();
        self.closed = true;
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}
