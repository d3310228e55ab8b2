//! Per-frame visual state
//!
//! A [`ParallaxFrame`] is a plain snapshot of every scroll-driven property of
//! the view for one sample. Hosts map it onto their own render tree; nothing
//! in here refers back into the composer.

use parallax_animation::ScrollInput;
use parallax_core::Color;
use serde::Serialize;

/// Transform and opacity of one positioned element
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ElementVisual {
    pub translate_x: f32,
    pub translate_y: f32,
    /// Uniform scale around the element center
    pub scale: f32,
    pub opacity: f32,
}

impl Default for ElementVisual {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// The fixed bar at the top of the view
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeaderBarVisual {
    pub background: Color,
}

/// The tab strip and its headings
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TabBarVisual {
    pub translate_y: f32,
    pub background: Color,
    pub text_color: Color,
    pub underline_color: Color,
}

/// What a tab's content receives on every frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionFrame {
    pub index: usize,
    pub active: bool,
    /// Height of the container the region is laid out in
    pub height: f32,
    pub heading: String,
}

/// Resting positions of the positioned elements, in view coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HeaderLayout {
    pub header_height: f32,
    pub image_height: f32,
    /// Top edge of the tab strip before any translation
    pub tab_bar_top: f32,
    pub tab_bar_height: f32,
    /// Present when a header-bottom overlay is mounted
    pub header_bottom_top: Option<f32>,
    pub header_bottom_width: f32,
    /// Present when a sub-header is mounted
    pub sub_header_top: Option<f32>,
    /// Spacer reserved above every region's content
    pub region_padding: f32,
}

/// Every scroll-driven property for one sample
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParallaxFrame {
    /// Sequence number of the sample this frame was computed from
    pub seq: u64,
    pub scroll: ScrollInputSnapshot,
    pub active_tab: usize,
    /// Allocated height of the scroll container
    pub content_extent: f32,
    pub header_image: ElementVisual,
    pub header_bar: HeaderBarVisual,
    pub tab_bar: TabBarVisual,
    pub header_bottom: Option<ElementVisual>,
    pub sub_header: Option<ElementVisual>,
}

/// Serializable copy of the channel readings a frame was computed from
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ScrollInputSnapshot {
    pub fast: f32,
    pub settled: f32,
}

impl From<ScrollInput> for ScrollInputSnapshot {
    fn from(input: ScrollInput) -> Self {
        Self {
            fast: input.fast,
            settled: input.settled,
        }
    }
}

impl ParallaxFrame {
    /// True once the header has fully collapsed into the bar
    pub fn is_docked(&self) -> bool {
        self.header_image.opacity <= 0.0
    }
}
