//! Content slots
//!
//! The view arranges host-provided content but never renders it. Header
//! overlays implement [`SlotContent`] and receive the whole frame; tab pages
//! implement [`TabContent`] and receive their own region frame.

use crate::visuals::{ParallaxFrame, RegionFrame};

/// Named header slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeaderSlot {
    /// Inside the fixed header bar (required)
    Top,
    /// On top of the header image
    Body,
    /// Docks into the header bar while scrolling
    Bottom,
    /// Below the header, fades out while scrolling
    SubHeader,
}

impl HeaderSlot {
    /// Every slot, in the order frames are delivered
    pub const ALL: [HeaderSlot; 4] = [
        HeaderSlot::Top,
        HeaderSlot::Body,
        HeaderSlot::Bottom,
        HeaderSlot::SubHeader,
    ];
}

/// Content placed in a header slot
pub trait SlotContent {
    fn apply(&mut self, frame: &ParallaxFrame);
}

impl<F> SlotContent for F
where
    F: FnMut(&ParallaxFrame),
{
    fn apply(&mut self, frame: &ParallaxFrame) {
        self(frame)
    }
}

/// Content of one tab
pub trait TabContent {
    /// Heading shown in the tab strip, overriding the configured one
    fn heading(&self) -> Option<String> {
        None
    }

    /// Natural height if the content already knows it at mount
    fn natural_height(&self) -> Option<f32> {
        None
    }

    fn apply(&mut self, frame: &RegionFrame);
}

/// Minimal tab content that remembers the last frame it received
#[derive(Clone, Debug, Default)]
pub struct TabPage {
    heading: Option<String>,
    natural_height: Option<f32>,
    last_frame: Option<RegionFrame>,
}

impl TabPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn natural_height(mut self, height: f32) -> Self {
        self.natural_height = Some(height);
        self
    }

    pub fn last_frame(&self) -> Option<&RegionFrame> {
        self.last_frame.as_ref()
    }
}

impl TabContent for TabPage {
    fn heading(&self) -> Option<String> {
        self.heading.clone()
    }

    fn natural_height(&self) -> Option<f32> {
        self.natural_height
    }

    fn apply(&mut self, frame: &RegionFrame) {
        self.last_frame = Some(frame.clone());
    }
}
