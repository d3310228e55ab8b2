//! View configuration
//!
//! One plain struct with an explicit defaults table. Every field is optional
//! when loading from TOML (or any serde format); omitted fields take the
//! values below.
//!
//! | field | default |
//! |---|---|
//! | `header_height` | 50 |
//! | `image_height` | 250 |
//! | `tab_bar_height` | 50 |
//! | `sub_header_height` | 130 |
//! | `header_bottom_height` | 130 |
//! | `header_bottom_width` | 250 |
//! | `min_tab_height` | 500 |
//! | `initial_tab` | 0 |
//! | `primary_color` | `rgba(85,186,255,1)` |
//! | `secondary_color` | `white` |
//! | `background_color` | `transparent` |
//! | `faded_primary_opacity` | 0.8 |
//! | `accent_colors` | derived from primary/secondary |
//! | `scroll_threshold` | 0.5 |
//! | `threshold_interval_ms` | 1500 |
//! | `header_bottom_downscale` | 0.7 (`None` disables shrinking) |
//! | `juxtapose_tab_bar` | false |
//! | `color_channel` | `logic` |
//! | `motion_channel` | `fast` (image, tab strip and overlay transforms) |
//! | `tab_headings` | `[]` (placeholders `Tab N`) |
//!
//! ```toml
//! image_height = 300.0
//! primary_color = "#1e88e5"
//! scroll_threshold = 0.75
//! juxtapose_tab_bar = true
//!
//! [[accent_colors]]
//! at = 0.0
//! color = "#1e88e5"
//!
//! [[accent_colors]]
//! at = 250.0
//! color = "white"
//! ```

use std::time::Duration;

use parallax_core::{Channel, Color};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_HEADER_HEIGHT: f32 = 50.0;
pub const DEFAULT_IMAGE_HEIGHT: f32 = 250.0;
pub const DEFAULT_TAB_BAR_HEIGHT: f32 = 50.0;
pub const DEFAULT_SUB_HEADER_HEIGHT: f32 = 130.0;
pub const DEFAULT_HEADER_BOTTOM_HEIGHT: f32 = 130.0;
pub const DEFAULT_HEADER_BOTTOM_WIDTH: f32 = 250.0;
pub const DEFAULT_TAB_HEIGHT: f32 = 500.0;
pub const DEFAULT_SCROLL_THRESHOLD: f32 = 0.5;
pub const DEFAULT_THRESHOLD_INTERVAL_MS: u64 = 1500;
pub const DEFAULT_HEADER_BOTTOM_DOWNSCALE: f32 = 0.7;
pub const DEFAULT_FADED_PRIMARY_OPACITY: f32 = 0.8;

/// Fraction of the scroll offset the header image travels with
pub const IMAGE_PARALLAX_FACTOR: f32 = 0.65;
/// Overscroll distance over which the header image zooms in
pub const OVERSCROLL_ZOOM_DISTANCE: f32 = 25.0;
/// Header image scale at the end of the overscroll zoom distance
pub const OVERSCROLL_ZOOM_SCALE: f32 = 1.1;
/// Vertical offset of the tab headings inside the tab strip
pub const TAB_HEADING_OFFSET: f32 = 3.0;
/// How far the header-bottom overlay overlaps the header image at rest
pub const HEADER_BOTTOM_OVERLAP: f32 = 50.0;
/// Top of the header-bottom overlay once docked into the header bar
pub const HEADER_BOTTOM_DOCK_TOP: f32 = 21.0;
/// How far the sub-header tucks under the header image at rest
pub const SUB_HEADER_OVERLAP: f32 = 15.0;

/// The stock tab/header accent color
pub const THEME_COLOR: Color = Color::rgba(85.0 / 255.0, 186.0 / 255.0, 1.0, 1.0);

/// One stop of a custom accent color table
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccentStop {
    /// Scroll offset of this stop
    pub at: f32,
    pub color: Color,
}

/// Construction-time configuration of a parallax tabs view
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Height of the fixed header bar
    pub header_height: f32,
    /// Height of the header image at rest
    pub image_height: f32,
    pub tab_bar_height: f32,
    pub sub_header_height: f32,
    pub header_bottom_height: f32,
    pub header_bottom_width: f32,
    /// Floor for the scroll container extent
    pub min_tab_height: f32,
    pub initial_tab: usize,

    pub primary_color: Color,
    pub secondary_color: Color,
    /// Header bar background before it docks
    pub background_color: Color,
    /// Alpha of the primary color at one fifth of the collapse range
    pub faded_primary_opacity: f32,
    /// Replaces the derived tab heading text/underline table
    pub accent_colors: Option<Vec<AccentStop>>,
    /// Channel the color tables are driven from
    pub color_channel: Channel,
    /// Channel the transform and opacity tables are driven from
    pub motion_channel: Channel,

    /// Scroll-to-height ratio above which the threshold callback fires
    pub scroll_threshold: f32,
    /// Minimum time between two threshold callbacks
    pub threshold_interval_ms: u64,

    /// Scale the header-bottom overlay shrinks to while docking
    pub header_bottom_downscale: Option<f32>,
    /// Overlap the tab strip with the bottom edge of the header image
    pub juxtapose_tab_bar: bool,

    pub tab_headings: Vec<String>,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            image_height: DEFAULT_IMAGE_HEIGHT,
            tab_bar_height: DEFAULT_TAB_BAR_HEIGHT,
            sub_header_height: DEFAULT_SUB_HEADER_HEIGHT,
            header_bottom_height: DEFAULT_HEADER_BOTTOM_HEIGHT,
            header_bottom_width: DEFAULT_HEADER_BOTTOM_WIDTH,
            min_tab_height: DEFAULT_TAB_HEIGHT,
            initial_tab: 0,
            primary_color: THEME_COLOR,
            secondary_color: Color::WHITE,
            background_color: Color::TRANSPARENT,
            faded_primary_opacity: DEFAULT_FADED_PRIMARY_OPACITY,
            accent_colors: None,
            color_channel: Channel::Logic,
            motion_channel: Channel::Fast,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            threshold_interval_ms: DEFAULT_THRESHOLD_INTERVAL_MS,
            header_bottom_downscale: Some(DEFAULT_HEADER_BOTTOM_DOWNSCALE),
            juxtapose_tab_bar: false,
            tab_headings: Vec::new(),
        }
    }
}

impl ParallaxConfig {
    /// Parse a TOML document; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: ParallaxConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace primary and secondary colors from CSS-style strings
    pub fn with_palette(mut self, primary: &str, secondary: &str) -> Result<Self> {
        self.primary_color = Color::parse(primary)?;
        self.secondary_color = Color::parse(secondary)?;
        Ok(self)
    }

    /// Scroll distance over which the header collapses into the bar
    pub fn collapse_range(&self) -> f32 {
        self.image_height - self.header_height
    }

    pub fn threshold_interval(&self) -> Duration {
        Duration::from_millis(self.threshold_interval_ms)
    }

    /// Heading for tab `index`, falling back to `Tab N`
    pub fn heading(&self, index: usize) -> String {
        self.tab_headings
            .get(index)
            .filter(|h| !h.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("Tab {}", index + 1))
    }

    /// Check every numeric parameter; run once per construction or
    /// reconfiguration.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("header_height", self.header_height),
            ("image_height", self.image_height),
            ("tab_bar_height", self.tab_bar_height),
            ("sub_header_height", self.sub_header_height),
            ("header_bottom_height", self.header_bottom_height),
            ("header_bottom_width", self.header_bottom_width),
            ("scroll_threshold", self.scroll_threshold),
        ];
        for (name, value) in lengths {
            non_negative(name, value)?;
        }

        if !(self.min_tab_height.is_finite() && self.min_tab_height > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "min_tab_height",
                value: self.min_tab_height,
            });
        }
        if self.collapse_range() <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "image_height",
                value: self.image_height,
            });
        }
        if !(0.0..=1.0).contains(&self.faded_primary_opacity) {
            return Err(ConfigError::InvalidParameter {
                name: "faded_primary_opacity",
                value: self.faded_primary_opacity,
            });
        }
        if let Some(scale) = self.header_bottom_downscale {
            if !(scale > 0.0 && scale <= 1.0) {
                return Err(ConfigError::InvalidParameter {
                    name: "header_bottom_downscale",
                    value: scale,
                });
            }
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter { name, value })
    }
}
