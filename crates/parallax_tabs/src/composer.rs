//! Layout composer
//!
//! Owns the scroll signal, the region registry and the threshold notifier of
//! one mounted view, and derives every visual property from the scroll
//! position through breakpoint tables built once from the configuration.
//!
//! With `S = image_height - header_height` (the collapse range):
//!
//! | element | property | table |
//! |---|---|---|
//! | header image | translate y | `0.65 * scroll` |
//! | header image | scale | `[-25, 0] -> [1.1, 1]`, clamped right |
//! | header image | opacity | `[0, S] -> [1, 0]` |
//! | header bar | background | `[0, S, S+1] -> [background, background, primary]` |
//! | tab strip | background | `[0, S] -> [secondary, primary]` |
//! | tab strip | text, underline | `[0, S/5, S] -> [primary, faded primary, secondary]` |
//! | tab strip | translate y | pinned until the collapse point, then rides with scroll |
//!
//! The optional header-bottom overlay and sub-header get their own tables
//! when mounted. Colors follow `color_channel`. Transforms and opacities
//! follow `motion_channel`, which defaults to the fast channel.
//!
//! # Example
//!
//! ```rust
//! use parallax_core::Viewport;
//! use parallax_tabs::{LayoutComposer, Overlays, ParallaxConfig};
//!
//! let headings = vec!["Posters".to_string(), "Characters".to_string()];
//! let mut composer = LayoutComposer::new(
//!     ParallaxConfig::default(),
//!     headings,
//!     Overlays::default(),
//!     Viewport::new(400.0, 800.0),
//! )
//! .unwrap();
//!
//! composer.record_height(0, 900.0);
//! assert_eq!(composer.extent(), 900.0);
//!
//! let frame = composer.on_scroll(200.0).unwrap();
//! assert_eq!(frame.header_image.opacity, 0.0);
//! ```

use std::time::Instant;

use parallax_animation::{Extrapolate, InterpolationSpec, ScrollBinding, ScrollInput};
use parallax_core::{BindingId, Color, ListenerId, ScrollSample, ScrollSignal, Viewport};

use crate::config::{
    ParallaxConfig, HEADER_BOTTOM_DOCK_TOP, HEADER_BOTTOM_OVERLAP, IMAGE_PARALLAX_FACTOR,
    OVERSCROLL_ZOOM_DISTANCE, OVERSCROLL_ZOOM_SCALE, SUB_HEADER_OVERLAP, TAB_HEADING_OFFSET,
};
use crate::error::{ConfigError, Result};
use crate::registry::RegionHeightRegistry;
use crate::threshold::ThresholdNotifier;
use crate::visuals::{
    ElementVisual, HeaderBarVisual, HeaderLayout, ParallaxFrame, RegionFrame, TabBarVisual,
};

/// Scroll distance past the header height before the header-bottom overlay
/// starts docking
const HEADER_BOTTOM_DOCK_START: f32 = 50.0;
/// Distance before the end of the image where shrinking completes
const HEADER_BOTTOM_SCALE_END: f32 = 75.0;
/// Distance before the end of the image where re-centering completes
const HEADER_BOTTOM_SHIFT_END: f32 = 70.0;
/// Overscroll push of the header-bottom overlay relative to the overscroll
const HEADER_BOTTOM_OVERSCROLL_FACTOR: f32 = 0.6;

/// Which optional overlays are mounted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    pub header_bottom: bool,
    pub sub_header: bool,
}

struct HeaderBottomBindings {
    translate_x: ScrollBinding<f32>,
    translate_y: ScrollBinding<f32>,
    scale: Option<ScrollBinding<f32>>,
}

struct SubHeaderBindings {
    translate_y: ScrollBinding<f32>,
    opacity: ScrollBinding<f32>,
}

struct Bindings {
    image_translate: ScrollBinding<f32>,
    image_scale: ScrollBinding<f32>,
    image_opacity: ScrollBinding<f32>,
    header_bar_background: ScrollBinding<Color>,
    tab_background: ScrollBinding<Color>,
    tab_text: ScrollBinding<Color>,
    tab_translate: ScrollBinding<f32>,
    header_bottom: Option<HeaderBottomBindings>,
    sub_header: Option<SubHeaderBindings>,
}

/// Scroll-driven layout state of one view
pub struct LayoutComposer {
    config: ParallaxConfig,
    overlays: Overlays,
    viewport: Viewport,
    signal: ScrollSignal,
    registry: RegionHeightRegistry,
    threshold: ThresholdNotifier,
    bindings: Bindings,
    extent: f32,
    disposed: bool,
}

impl LayoutComposer {
    /// Build the composer for one region per heading.
    ///
    /// Fails if the configuration is invalid, there are no regions, the
    /// initial tab does not exist, or more headings are configured than
    /// there are regions.
    pub fn new(
        config: ParallaxConfig,
        headings: Vec<String>,
        overlays: Overlays,
        viewport: Viewport,
    ) -> Result<Self> {
        config.validate()?;
        let count = headings.len();
        if count == 0 {
            return Err(ConfigError::MissingTabs);
        }
        check_headings(&config, count)?;
        if config.initial_tab >= count {
            return Err(ConfigError::InitialTabOutOfRange {
                index: config.initial_tab,
                count,
            });
        }
        let viewport = if viewport.is_valid() {
            viewport
        } else {
            Viewport::ZERO
        };

        let registry = RegionHeightRegistry::new(
            headings,
            config.initial_tab,
            config.min_tab_height,
            region_padding(&config, overlays),
        );
        let extent = registry.active_extent();
        let bindings = build_bindings(&config, overlays, viewport, extent)?;
        let threshold = ThresholdNotifier::new(config.scroll_threshold, config.threshold_interval());

        tracing::debug!(regions = count, active = config.initial_tab, extent, "layout composer created");

        Ok(Self {
            config,
            overlays,
            viewport,
            signal: ScrollSignal::new(),
            registry,
            threshold,
            bindings,
            extent,
            disposed: false,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    pub fn overlays(&self) -> Overlays {
        self.overlays
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn active_tab(&self) -> usize {
        self.registry.active_index()
    }

    /// Allocated height of the scroll container
    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn registry(&self) -> &RegionHeightRegistry {
        &self.registry
    }

    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    pub fn threshold(&self) -> &ThresholdNotifier {
        &self.threshold
    }

    pub fn threshold_mut(&mut self) -> &mut ThresholdNotifier {
        &mut self.threshold
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Current readings of both channels
    pub fn scroll_input(&self) -> ScrollInput {
        ScrollInput {
            fast: self.signal.offset(),
            settled: self.signal.settled(),
        }
    }

    // =========================================================================
    // Scroll channels
    // =========================================================================

    /// Fast path: record a raw offset and compute the frame for it
    pub fn on_scroll(&mut self, offset: f32) -> Option<ParallaxFrame> {
        if self.disposed {
            tracing::warn!(offset, "scroll after teardown ignored");
            return None;
        }
        self.signal.on_scroll_event(offset)?;
        Some(self.frame())
    }

    /// Logic path: deliver queued samples, run the threshold check for each
    /// and return the frame at the settled position.
    ///
    /// Returns `None` when nothing was queued.
    pub fn pump(&mut self, now: Instant) -> Option<ParallaxFrame> {
        let mut delivered = false;
        while let Some(sample) = self.signal.next_settled() {
            delivered = true;
            self.threshold.on_settled_position_change(
                sample.offset,
                self.registry.active_index(),
                self.registry.active_height(),
                now,
            );
        }
        delivered.then(|| self.frame())
    }

    /// Attach an external fast-path binding
    pub fn bind<F: FnMut(ScrollSample) + Send + 'static>(&mut self, f: F) -> BindingId {
        self.signal.bind(f)
    }

    /// Attach an external logic-channel listener
    pub fn listen<F: FnMut(ScrollSample) + 'static>(&mut self, f: F) -> ListenerId {
        self.signal.listen(f)
    }

    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.signal.unbind(id)
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.signal.unlisten(id)
    }

    // =========================================================================
    // Tabs and regions
    // =========================================================================

    /// Switch the active tab; out-of-range and unchanged indices are ignored.
    ///
    /// Returns the new extent when the tab changed.
    pub fn change_tab(&mut self, index: usize) -> Option<f32> {
        if self.disposed {
            tracing::warn!(index, "tab change after teardown ignored");
            return None;
        }
        let extent = self.registry.set_active(index)?;
        tracing::debug!(index, extent, "active tab changed");
        self.set_extent(extent);
        Some(extent)
    }

    /// Record the natural height region `index` measured.
    ///
    /// Returns the new extent when the region is active and its height
    /// changed.
    pub fn record_height(&mut self, index: usize, height: f32) -> Option<f32> {
        if self.disposed {
            tracing::warn!(index, "region layout after teardown ignored");
            return None;
        }
        let extent = self.registry.record_height(index, height)?;
        self.set_extent(extent);
        Some(extent)
    }

    fn set_extent(&mut self, extent: f32) {
        if extent == self.extent {
            return;
        }
        tracing::debug!(from = self.extent, to = extent, "scroll extent changed");
        self.extent = extent;
        match tab_translate(&self.config, extent) {
            Ok(binding) => self.bindings.tab_translate = binding,
            Err(err) => tracing::warn!(%err, extent, "tab strip table not rebuilt"),
        }
    }

    /// Replace the region headings by position
    pub fn set_headings(&mut self, headings: Vec<String>) {
        self.registry.set_headings(headings);
    }

    /// Frame for region `index`
    pub fn region_frame(&self, index: usize) -> Option<RegionFrame> {
        let region = self.registry.region(index)?;
        let active = index == self.registry.active_index();
        let height = if active {
            self.extent
        } else {
            region.padded_height.max(self.registry.min_height())
        };
        Some(RegionFrame {
            index,
            active,
            height,
            heading: region.heading.clone(),
        })
    }

    // =========================================================================
    // Reconfiguration
    // =========================================================================

    /// Apply a new viewport and rebuild the width-dependent tables
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if !viewport.is_valid() {
            tracing::trace!(?viewport, "invalid viewport ignored");
            return Ok(());
        }
        if viewport == self.viewport {
            return Ok(());
        }
        self.bindings = build_bindings(&self.config, self.overlays, viewport, self.extent)?;
        self.viewport = viewport;
        tracing::debug!(width = viewport.width, height = viewport.height, "viewport resized");
        Ok(())
    }

    /// Replace the configuration and rebuild every table.
    ///
    /// Recorded heights are kept and re-padded. Headings are kept; callers
    /// that resolve them from the new config pass them to
    /// [`set_headings`](Self::set_headings). The initial tab setting only
    /// applies at construction. On error nothing changes.
    pub fn reconfigure(&mut self, config: ParallaxConfig) -> Result<()> {
        config.validate()?;
        check_headings(&config, self.registry.len())?;

        let mut registry = self.registry.clone();
        registry.set_min_height(config.min_tab_height);
        registry.set_auxiliary_height(region_padding(&config, self.overlays));
        let extent = registry.active_extent();
        let bindings = build_bindings(&config, self.overlays, self.viewport, extent)?;

        self.threshold.set_threshold(config.scroll_threshold);
        self.threshold.set_interval(config.threshold_interval());
        self.registry = registry;
        self.bindings = bindings;
        if extent != self.extent {
            tracing::debug!(from = self.extent, to = extent, "scroll extent changed");
        }
        self.extent = extent;
        self.config = config;
        tracing::debug!("configuration rebuilt");
        Ok(())
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Static layout of the positioned elements
    pub fn layout(&self) -> HeaderLayout {
        let c = &self.config;
        HeaderLayout {
            header_height: c.header_height,
            image_height: c.image_height,
            tab_bar_top: c.image_height,
            tab_bar_height: c.tab_bar_height,
            header_bottom_top: self
                .overlays
                .header_bottom
                .then(|| c.image_height - HEADER_BOTTOM_OVERLAP),
            header_bottom_width: c.header_bottom_width,
            sub_header_top: self
                .overlays
                .sub_header
                .then(|| c.image_height + c.header_height - SUB_HEADER_OVERLAP),
            region_padding: self.registry.auxiliary_height(),
        }
    }

    /// Evaluate every table at the current channel readings
    pub fn frame(&self) -> ParallaxFrame {
        let input = self.scroll_input();
        let b = &self.bindings;

        let text = b.tab_text.evaluate(input);
        let header_bottom = b.header_bottom.as_ref().map(|hb| ElementVisual {
            translate_x: hb.translate_x.evaluate(input),
            translate_y: hb.translate_y.evaluate(input),
            scale: hb.scale.as_ref().map_or(1.0, |s| s.evaluate(input)),
            opacity: 1.0,
        });
        let sub_header = b.sub_header.as_ref().map(|sh| ElementVisual {
            translate_y: sh.translate_y.evaluate(input),
            opacity: sh.opacity.evaluate(input),
            ..ElementVisual::default()
        });

        ParallaxFrame {
            seq: self.signal.seq(),
            scroll: input.into(),
            active_tab: self.registry.active_index(),
            content_extent: self.extent,
            header_image: ElementVisual {
                translate_x: 0.0,
                translate_y: b.image_translate.evaluate(input),
                scale: b.image_scale.evaluate(input),
                opacity: b.image_opacity.evaluate(input),
            },
            header_bar: HeaderBarVisual {
                background: b.header_bar_background.evaluate(input),
            },
            tab_bar: TabBarVisual {
                translate_y: b.tab_translate.evaluate(input),
                background: b.tab_background.evaluate(input),
                text_color: text,
                underline_color: text,
            },
            header_bottom,
            sub_header,
        }
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Release every subscription and the open cooldown window
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.signal.close();
        self.threshold.release();
        self.disposed = true;
        tracing::debug!("layout composer disposed");
    }
}

fn check_headings(config: &ParallaxConfig, tabs: usize) -> Result<()> {
    let headings = config.tab_headings.len();
    if headings > tabs {
        return Err(ConfigError::HeadingCount { headings, tabs });
    }
    Ok(())
}

/// Spacer above every region: room for the docked header-bottom overlay
fn region_padding(config: &ParallaxConfig, overlays: Overlays) -> f32 {
    if overlays.header_bottom {
        config.header_bottom_height
    } else {
        0.0
    }
}

/// Breakpoint after `start` that is at least one unit past it
fn ramp(start: f32, end: f32) -> f32 {
    end.max(start + 1.0)
}

fn build_bindings(
    config: &ParallaxConfig,
    overlays: Overlays,
    viewport: Viewport,
    extent: f32,
) -> Result<Bindings> {
    let collapse = config.collapse_range();
    let colors = config.color_channel;
    let motion = config.motion_channel;

    let image_translate = ScrollBinding::new(
        InterpolationSpec::new([(0.0, 0.0), (1.0, IMAGE_PARALLAX_FACTOR)])?,
        motion,
    );
    let image_scale = ScrollBinding::new(
        InterpolationSpec::new([(-OVERSCROLL_ZOOM_DISTANCE, OVERSCROLL_ZOOM_SCALE), (0.0, 1.0)])?
            .extrapolate_right(Extrapolate::Clamp),
        motion,
    );
    let image_opacity = ScrollBinding::new(
        InterpolationSpec::new([(0.0, 1.0), (collapse, 0.0)])?.clamp(),
        motion,
    );

    let header_bar_background = ScrollBinding::new(
        InterpolationSpec::new([
            (0.0, config.background_color),
            (collapse, config.background_color),
            (collapse + 1.0, config.primary_color),
        ])?
        .clamp(),
        colors,
    );
    let tab_background = ScrollBinding::new(
        InterpolationSpec::new([
            (0.0, config.secondary_color),
            (collapse, config.primary_color),
        ])?
        .clamp(),
        colors,
    );
    let tab_text = ScrollBinding::new(accent_table(config)?, colors);

    let header_bottom = if overlays.header_bottom {
        Some(header_bottom_bindings(config, viewport)?)
    } else {
        None
    };
    let sub_header = if overlays.sub_header {
        Some(sub_header_bindings(config)?)
    } else {
        None
    };

    Ok(Bindings {
        image_translate,
        image_scale,
        image_opacity,
        header_bar_background,
        tab_background,
        tab_text,
        tab_translate: tab_translate(config, extent)?,
        header_bottom,
        sub_header,
    })
}

fn accent_table(config: &ParallaxConfig) -> Result<InterpolationSpec<Color>> {
    let spec = match &config.accent_colors {
        Some(stops) => InterpolationSpec::new(stops.iter().map(|s| (s.at, s.color)))?,
        None => {
            let collapse = config.collapse_range();
            let faded = config
                .primary_color
                .with_alpha(config.primary_color.a * config.faded_primary_opacity);
            InterpolationSpec::new([
                (0.0, config.primary_color),
                (collapse / 5.0, faded),
                (collapse, config.secondary_color),
            ])?
        }
    };
    Ok(spec.clamp())
}

fn header_bottom_bindings(
    config: &ParallaxConfig,
    viewport: Viewport,
) -> Result<HeaderBottomBindings> {
    let image = config.image_height;
    let min = config.min_tab_height;
    let start = config.header_height + HEADER_BOTTOM_DOCK_START;
    let motion = config.motion_channel;

    // Rest top is `image - overlap`; docking lifts it to the dock top
    let dock = ramp(0.0, image - HEADER_BOTTOM_OVERLAP - HEADER_BOTTOM_DOCK_TOP);
    let translate_y = ScrollBinding::new(
        InterpolationSpec::new([
            (-min, HEADER_BOTTOM_OVERSCROLL_FACTOR * min),
            (0.0, 0.0),
            (dock, -dock),
        ])?
        .clamp(),
        motion,
    );

    let shift = ((viewport.width - config.header_bottom_width) / 2.0).max(0.0);
    let translate_x = ScrollBinding::new(
        InterpolationSpec::new([
            (start, 0.0),
            (ramp(start, image - HEADER_BOTTOM_SHIFT_END), shift),
        ])?
        .clamp(),
        motion,
    );

    let scale = match config.header_bottom_downscale {
        Some(downscale) => Some(ScrollBinding::new(
            InterpolationSpec::new([
                (start, 1.0),
                (ramp(start, image - HEADER_BOTTOM_SCALE_END), downscale),
            ])?
            .clamp(),
            motion,
        )),
        None => None,
    };

    Ok(HeaderBottomBindings {
        translate_x,
        translate_y,
        scale,
    })
}

fn sub_header_bindings(config: &ParallaxConfig) -> Result<SubHeaderBindings> {
    let min = config.min_tab_height;
    let travel = config.image_height + config.header_height + config.sub_header_height;

    let translate_y = ScrollBinding::new(
        InterpolationSpec::new([(-min, min), (ramp(-min, travel), -ramp(-min, travel))])?.clamp(),
        config.motion_channel,
    );
    let fade = ramp(0.0, config.collapse_range() + config.sub_header_height);
    let opacity = ScrollBinding::new(
        InterpolationSpec::new([(0.0, 1.0), (fade, 0.0)])?.clamp(),
        config.motion_channel,
    );

    Ok(SubHeaderBindings {
        translate_y,
        opacity,
    })
}

/// Tab strip offset: pinned at the heading offset while the header collapses,
/// then following the scroll so the strip stays docked under the header bar.
fn tab_translate(config: &ParallaxConfig, extent: f32) -> Result<ScrollBinding<f32>> {
    let (offset, pin) = if config.juxtapose_tab_bar {
        (
            TAB_HEADING_OFFSET - config.tab_bar_height,
            config.collapse_range() - config.tab_bar_height,
        )
    } else {
        (TAB_HEADING_OFFSET, config.collapse_range())
    };
    let pin = pin.max(0.0);
    let end = ramp(pin, extent);

    let mut stops = vec![(0.0, offset)];
    if pin > 0.0 {
        stops.push((pin, offset));
    }
    stops.push((end, offset + end - pin));

    Ok(ScrollBinding::new(InterpolationSpec::new(stops)?, config.motion_channel))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer(count: usize, overlays: Overlays) -> LayoutComposer {
        let headings = (1..=count).map(|i| format!("Tab {i}")).collect();
        LayoutComposer::new(
            ParallaxConfig::default(),
            headings,
            overlays,
            Viewport::new(400.0, 800.0),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_and_bad_initial_tab() {
        assert!(matches!(
            LayoutComposer::new(ParallaxConfig::default(), Vec::new(), Overlays::default(), Viewport::ZERO),
            Err(ConfigError::MissingTabs)
        ));

        let config = ParallaxConfig {
            initial_tab: 2,
            ..Default::default()
        };
        assert!(matches!(
            LayoutComposer::new(config, vec!["a".into(), "b".into()], Overlays::default(), Viewport::ZERO),
            Err(ConfigError::InitialTabOutOfRange { index: 2, count: 2 })
        ));

        let config = ParallaxConfig {
            tab_headings: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        assert!(matches!(
            LayoutComposer::new(config, vec!["a".into()], Overlays::default(), Viewport::ZERO),
            Err(ConfigError::HeadingCount { headings: 2, tabs: 1 })
        ));
    }

    #[test]
    fn test_header_image_tables() {
        let mut c = composer(1, Overlays::default());

        let frame = c.on_scroll(100.0).unwrap();
        assert!((frame.header_image.translate_y - 65.0).abs() < 1e-4);
        assert_eq!(frame.header_image.scale, 1.0);
        assert_eq!(frame.header_image.opacity, 0.5);

        let frame = c.on_scroll(-25.0).unwrap();
        assert!((frame.header_image.scale - 1.1).abs() < 1e-6);
        assert_eq!(frame.header_image.opacity, 1.0);

        let frame = c.on_scroll(1000.0).unwrap();
        assert_eq!(frame.header_image.opacity, 0.0);
        assert!(frame.is_docked());
    }

    #[test]
    fn test_colors_follow_settled_channel() {
        let mut c = composer(1, Overlays::default());
        let frame = c.on_scroll(200.0).unwrap();
        // logic channel not pumped yet
        assert_eq!(frame.tab_bar.background, Color::WHITE);
        assert_eq!(frame.header_bar.background, Color::TRANSPARENT);

        let frame = c.pump(Instant::now()).unwrap();
        assert_eq!(frame.tab_bar.background, c.config().primary_color);
        assert_eq!(frame.tab_bar.text_color, Color::WHITE);
        assert_eq!(frame.header_bar.background, Color::TRANSPARENT);

        c.on_scroll(201.0);
        let frame = c.pump(Instant::now()).unwrap();
        assert_eq!(frame.header_bar.background, c.config().primary_color);
        assert!(c.pump(Instant::now()).is_none());
    }

    #[test]
    fn test_tab_strip_pins_then_rides() {
        let mut c = composer(1, Overlays::default());
        assert_eq!(c.on_scroll(0.0).unwrap().tab_bar.translate_y, 3.0);
        assert_eq!(c.on_scroll(200.0).unwrap().tab_bar.translate_y, 3.0);
        assert!((c.on_scroll(300.0).unwrap().tab_bar.translate_y - 103.0).abs() < 1e-3);
        assert_eq!(c.on_scroll(-40.0).unwrap().tab_bar.translate_y, 3.0);
    }

    #[test]
    fn test_juxtaposed_tab_strip() {
        let config = ParallaxConfig {
            juxtapose_tab_bar: true,
            ..Default::default()
        };
        let mut c =
            LayoutComposer::new(config, vec!["a".into()], Overlays::default(), Viewport::ZERO)
                .unwrap();
        assert_eq!(c.on_scroll(0.0).unwrap().tab_bar.translate_y, -47.0);
        assert_eq!(c.on_scroll(150.0).unwrap().tab_bar.translate_y, -47.0);
        assert!((c.on_scroll(250.0).unwrap().tab_bar.translate_y - 53.0).abs() < 1e-3);
    }

    #[test]
    fn test_header_bottom_docks_and_shrinks() {
        let overlays = Overlays {
            header_bottom: true,
            sub_header: false,
        };
        let mut c = composer(1, overlays);
        assert_eq!(c.layout().header_bottom_top, Some(200.0));
        assert_eq!(c.layout().region_padding, 130.0);

        let rest = c.on_scroll(0.0).unwrap().header_bottom.unwrap();
        assert_eq!(rest, ElementVisual::default());

        let docked = c.on_scroll(400.0).unwrap().header_bottom.unwrap();
        assert_eq!(docked.translate_y, -179.0);
        assert_eq!(docked.scale, 0.7);
        assert_eq!(docked.translate_x, 75.0);

        let pulled = c.on_scroll(-500.0).unwrap().header_bottom.unwrap();
        assert_eq!(pulled.translate_y, 300.0);
    }

    #[test]
    fn test_resize_recenters_header_bottom() {
        let overlays = Overlays {
            header_bottom: true,
            sub_header: false,
        };
        let mut c = composer(1, overlays);
        c.resize(Viewport::new(200.0, 800.0)).unwrap();
        let docked = c.on_scroll(400.0).unwrap().header_bottom.unwrap();
        assert_eq!(docked.translate_x, 0.0);
        assert_eq!(c.viewport().width, 200.0);
    }

    #[test]
    fn test_sub_header_fades() {
        let overlays = Overlays {
            header_bottom: false,
            sub_header: true,
        };
        let mut c = composer(1, overlays);
        assert_eq!(c.layout().sub_header_top, Some(285.0));
        assert_eq!(c.layout().header_bottom_top, None);

        let sub = c.on_scroll(165.0).unwrap().sub_header.unwrap();
        assert_eq!(sub.opacity, 0.5);
        assert!((sub.translate_y + 165.0).abs() < 1e-3);
        assert!(c.frame().header_bottom.is_none());
    }

    #[test]
    fn test_extent_follows_active_region() {
        let mut c = composer(2, Overlays::default());
        assert_eq!(c.record_height(1, 800.0), None);
        assert_eq!(c.extent(), 500.0);
        assert_eq!(c.change_tab(1), Some(800.0));
        assert_eq!(c.region_frame(1).unwrap().height, 800.0);
        assert_eq!(c.region_frame(0).unwrap().height, 500.0);
        assert!(!c.region_frame(0).unwrap().active);
        assert_eq!(c.change_tab(7), None);
        assert_eq!(c.active_tab(), 1);
    }

    #[test]
    fn test_reconfigure_keeps_heights() {
        let mut c = composer(2, Overlays::default());
        c.record_height(0, 700.0);

        let config = ParallaxConfig {
            min_tab_height: 900.0,
            scroll_threshold: 0.9,
            ..Default::default()
        };
        c.reconfigure(config).unwrap();
        assert_eq!(c.registry().height_of(0), Some(700.0));
        assert_eq!(c.extent(), 900.0);
        assert_eq!(c.threshold().threshold(), 0.9);

        let bad = ParallaxConfig {
            image_height: 10.0,
            ..Default::default()
        };
        assert!(c.reconfigure(bad).is_err());
        assert_eq!(c.config().min_tab_height, 900.0);
    }

    #[test]
    fn test_dispose_stops_everything() {
        let mut c = composer(2, Overlays::default());
        c.listen(|_| {});
        c.dispose();
        assert!(c.is_disposed());
        assert!(c.on_scroll(10.0).is_none());
        assert!(c.change_tab(1).is_none());
        assert!(c.record_height(0, 900.0).is_none());
        assert_eq!(c.signal().listener_count(), 0);
    }
}
