//! Parallax Tabs
//!
//! A scroll-driven layout engine for a screen with a parallax header image,
//! a tab strip that docks into a header bar, and tab regions whose measured
//! heights drive the scroll container extent.
//!
//! # Features
//!
//! - **Header Collapse**: image parallax, overscroll zoom and fade, header bar
//!   and tab strip recoloring across the collapse range
//! - **Overlays**: optional header-bottom overlay that docks and shrinks into
//!   the bar, and a sub-header that fades out
//! - **Region Heights**: per-tab measured heights with a minimum floor; the
//!   active tab's height sizes the scroll container
//! - **Threshold Callback**: debounced notification when scrolling past a
//!   fraction of the active region, for lazy loading
//! - **Configuration**: one serde struct with an explicit defaults table,
//!   loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use parallax_core::ViewEvent;
//! use parallax_tabs::{ParallaxConfig, ParallaxFrame, ParallaxTabsView, TabPage};
//!
//! let config = ParallaxConfig::from_toml_str("min_tab_height = 600.0").unwrap();
//! let mut view = ParallaxTabsView::builder()
//!     .config(config)
//!     .header_top(|frame: &ParallaxFrame| {
//!         let _ = frame.header_bar.background;
//!     })
//!     .tabs([TabPage::new(), TabPage::new()])
//!     .build()
//!     .unwrap();
//!
//! view.handle_event(ViewEvent::TabChange { index: 1 });
//! assert_eq!(view.active_tab(), 1);
//! assert_eq!(view.extent(), 600.0);
//! ```

pub mod composer;
pub mod config;
pub mod content;
pub mod error;
pub mod registry;
pub mod threshold;
pub mod view;
pub mod visuals;

pub use composer::{LayoutComposer, Overlays};
pub use config::{AccentStop, ParallaxConfig};
pub use content::{HeaderSlot, SlotContent, TabContent, TabPage};
pub use error::{ConfigError, Result};
pub use registry::{RegionDescriptor, RegionHeightRegistry};
pub use threshold::{ThresholdCallback, ThresholdNotifier, ThresholdState};
pub use view::{ParallaxTabsView, ParallaxTabsViewBuilder};
pub use visuals::{
    ElementVisual, HeaderBarVisual, HeaderLayout, ParallaxFrame, RegionFrame,
    ScrollInputSnapshot, TabBarVisual,
};
