//! Parallax tabs view
//!
//! The facade a host mounts: it owns the content slots and a
//! [`LayoutComposer`], turns host events into composer calls, and pushes the
//! resulting frames into the content.
//!
//! # Example
//!
//! ```rust
//! use parallax_core::{ViewEvent, Viewport};
//! use parallax_tabs::{ParallaxFrame, ParallaxTabsView, TabPage};
//!
//! let mut view = ParallaxTabsView::builder()
//!     .viewport(Viewport::new(400.0, 800.0))
//!     .header_top(|_frame: &ParallaxFrame| {})
//!     .tab(TabPage::new().heading("Posters"))
//!     .tab(TabPage::new().heading("Characters"))
//!     .on_scroll_past_threshold(|index| println!("load more for tab {index}"))
//!     .build()
//!     .unwrap();
//!
//! view.handle_event(ViewEvent::RegionLayout { index: 0, height: 1200.0 });
//! view.handle_event(ViewEvent::Scroll { offset: 700.0 });
//! assert_eq!(view.extent(), 1200.0);
//! ```

use parallax_core::{
    BindingId, Clock, ListenerId, ScrollSample, SystemClock, ViewEvent, Viewport,
};
use rustc_hash::FxHashMap;

use crate::composer::{LayoutComposer, Overlays};
use crate::config::ParallaxConfig;
use crate::content::{HeaderSlot, SlotContent, TabContent};
use crate::error::{ConfigError, Result};
use crate::threshold::ThresholdCallback;
use crate::visuals::{HeaderLayout, ParallaxFrame};

/// Builder for [`ParallaxTabsView`]
pub struct ParallaxTabsViewBuilder {
    config: ParallaxConfig,
    viewport: Viewport,
    tabs: Vec<Box<dyn TabContent>>,
    slots: FxHashMap<HeaderSlot, Box<dyn SlotContent>>,
    on_threshold: Option<ThresholdCallback>,
    clock: Option<Box<dyn Clock>>,
}

impl ParallaxTabsViewBuilder {
    pub fn new() -> Self {
        Self {
            config: ParallaxConfig::default(),
            viewport: Viewport::ZERO,
            tabs: Vec::new(),
            slots: FxHashMap::default(),
            on_threshold: None,
            clock: None,
        }
    }

    pub fn config(mut self, config: ParallaxConfig) -> Self {
        self.config = config;
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Append one tab
    pub fn tab<T: TabContent + 'static>(mut self, tab: T) -> Self {
        self.tabs.push(Box::new(tab));
        self
    }

    /// Append several tabs of the same type
    pub fn tabs<T, I>(mut self, tabs: I) -> Self
    where
        T: TabContent + 'static,
        I: IntoIterator<Item = T>,
    {
        for tab in tabs {
            self.tabs.push(Box::new(tab));
        }
        self
    }

    /// Put content in a header slot, replacing what was there
    pub fn slot<S: SlotContent + 'static>(mut self, slot: HeaderSlot, content: S) -> Self {
        self.slots.insert(slot, Box::new(content));
        self
    }

    pub fn header_top<S: SlotContent + 'static>(self, content: S) -> Self {
        self.slot(HeaderSlot::Top, content)
    }

    pub fn header_body<S: SlotContent + 'static>(self, content: S) -> Self {
        self.slot(HeaderSlot::Body, content)
    }

    pub fn header_bottom<S: SlotContent + 'static>(self, content: S) -> Self {
        self.slot(HeaderSlot::Bottom, content)
    }

    pub fn sub_header<S: SlotContent + 'static>(self, content: S) -> Self {
        self.slot(HeaderSlot::SubHeader, content)
    }

    /// Called with the active tab index when scrolling past the threshold
    pub fn on_scroll_past_threshold<F: FnMut(usize) + 'static>(mut self, f: F) -> Self {
        self.on_threshold = Some(Box::new(f));
        self
    }

    /// Time source for the threshold cooldown (defaults to the system clock)
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Validate everything and mount the view
    pub fn build(self) -> Result<ParallaxTabsView> {
        if self.tabs.is_empty() {
            return Err(ConfigError::MissingTabs);
        }
        if !self.slots.contains_key(&HeaderSlot::Top) {
            return Err(ConfigError::MissingHeaderTop);
        }

        let headings = resolve_headings(&self.tabs, &self.config);
        let overlays = Overlays {
            header_bottom: self.slots.contains_key(&HeaderSlot::Bottom),
            sub_header: self.slots.contains_key(&HeaderSlot::SubHeader),
        };

        let mut composer = LayoutComposer::new(self.config, headings, overlays, self.viewport)?;
        if let Some(callback) = self.on_threshold {
            composer.threshold_mut().set_callback(callback);
        }

        let mut view = ParallaxTabsView {
            composer,
            tabs: self.tabs,
            slots: self.slots,
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
            last_frame: None,
        };
        view.remeasure();
        view.deliver_current();
        Ok(view)
    }
}

impl Default for ParallaxTabsViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A mounted parallax tabs view
pub struct ParallaxTabsView {
    composer: LayoutComposer,
    tabs: Vec<Box<dyn TabContent>>,
    slots: FxHashMap<HeaderSlot, Box<dyn SlotContent>>,
    clock: Box<dyn Clock>,
    last_frame: Option<ParallaxFrame>,
}

impl ParallaxTabsView {
    pub fn builder() -> ParallaxTabsViewBuilder {
        ParallaxTabsViewBuilder::new()
    }

    // =========================================================================
    // Event delivery
    // =========================================================================

    /// Handle one host event to completion
    pub fn handle_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Scroll { offset } => self.scroll(offset),
            ViewEvent::ScrollEnd => {
                self.pump();
            }
            ViewEvent::RegionLayout { index, height } => {
                self.region_layout(index, height);
            }
            ViewEvent::TabChange { index } => {
                self.change_tab(index);
            }
            ViewEvent::Resize(viewport) => {
                if let Err(err) = self.resize(viewport) {
                    tracing::warn!(%err, "resize failed");
                }
            }
            ViewEvent::Unmount => self.dispose(),
        }
    }

    /// Run both channels for one offset: fast bindings, then the logic pass
    pub fn scroll(&mut self, offset: f32) {
        if self.on_scroll(offset) {
            self.pump();
        }
    }

    /// Fast path only; returns whether a frame was delivered
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        match self.composer.on_scroll(offset) {
            Some(frame) => {
                self.deliver(frame);
                true
            }
            None => false,
        }
    }

    /// Drain the logic channel and run the threshold check
    pub fn pump(&mut self) -> bool {
        let now = self.clock.now();
        match self.composer.pump(now) {
            Some(frame) => {
                self.deliver(frame);
                true
            }
            None => false,
        }
    }

    /// Switch tabs; out-of-range indices are ignored
    pub fn change_tab(&mut self, index: usize) -> bool {
        let changed = self.composer.change_tab(index).is_some();
        if changed {
            self.deliver_current();
        }
        changed
    }

    /// A region measured its natural height
    pub fn region_layout(&mut self, index: usize, height: f32) -> bool {
        let resized = self.composer.record_height(index, height).is_some();
        if resized {
            self.deliver_current();
        }
        resized
    }

    /// Ask every tab for its natural height and record the ones that know it
    pub fn remeasure(&mut self) {
        let heights: Vec<_> = self
            .tabs
            .iter()
            .enumerate()
            .filter_map(|(i, tab)| tab.natural_height().map(|h| (i, h)))
            .collect();
        let mut resized = false;
        for (index, height) in heights {
            resized |= self.composer.record_height(index, height).is_some();
        }
        if resized {
            self.deliver_current();
        }
    }

    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        self.composer.resize(viewport)?;
        self.deliver_current();
        Ok(())
    }

    /// Replace the configuration; on error the view keeps the old one.
    ///
    /// Headings are resolved again: a tab's own heading wins over the new
    /// `tab_headings`.
    pub fn reconfigure(&mut self, config: ParallaxConfig) -> Result<()> {
        self.composer.reconfigure(config)?;
        let headings = resolve_headings(&self.tabs, self.composer.config());
        self.composer.set_headings(headings);
        self.deliver_current();
        Ok(())
    }

    // =========================================================================
    // External subscribers
    // =========================================================================

    pub fn bind<F: FnMut(ScrollSample) + Send + 'static>(&mut self, f: F) -> BindingId {
        self.composer.bind(f)
    }

    pub fn listen<F: FnMut(ScrollSample) + 'static>(&mut self, f: F) -> ListenerId {
        self.composer.listen(f)
    }

    pub fn unbind(&mut self, id: BindingId) -> bool {
        self.composer.unbind(id)
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.composer.unlisten(id)
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn composer(&self) -> &LayoutComposer {
        &self.composer
    }

    pub fn active_tab(&self) -> usize {
        self.composer.active_tab()
    }

    pub fn extent(&self) -> f32 {
        self.composer.extent()
    }

    pub fn layout(&self) -> HeaderLayout {
        self.composer.layout()
    }

    /// Last frame delivered to the content
    pub fn last_frame(&self) -> Option<&ParallaxFrame> {
        self.last_frame.as_ref()
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    pub fn has_slot(&self, slot: HeaderSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn is_disposed(&self) -> bool {
        self.composer.is_disposed()
    }

    /// Release subscriptions, the cooldown and all content
    pub fn dispose(&mut self) {
        if self.composer.is_disposed() {
            return;
        }
        self.composer.dispose();
        self.slots.clear();
        self.tabs.clear();
        self.last_frame = None;
    }

    fn deliver_current(&mut self) {
        let frame = self.composer.frame();
        self.deliver(frame);
    }

    fn deliver(&mut self, frame: ParallaxFrame) {
        if self.composer.is_disposed() {
            return;
        }
        for slot in HeaderSlot::ALL {
            if let Some(content) = self.slots.get_mut(&slot) {
                content.apply(&frame);
            }
        }
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            if let Some(region) = self.composer.region_frame(index) {
                tab.apply(&region);
            }
        }
        self.last_frame = Some(frame);
    }
}

/// Heading per tab: the tab's own heading, else the configured one
fn resolve_headings(tabs: &[Box<dyn TabContent>], config: &ParallaxConfig) -> Vec<String> {
    tabs.iter()
        .enumerate()
        .map(|(i, tab)| tab.heading().unwrap_or_else(|| config.heading(i)))
        .collect()
}

impl Drop for ParallaxTabsView {
    fn drop(&mut self) {
        self.dispose();
    }
}
