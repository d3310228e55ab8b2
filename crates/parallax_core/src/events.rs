//! View events
//!
//! Everything the host delivers to a mounted view arrives as one of these
//! events. Each is handled to completion before the next is looked at.

use crate::geometry::Viewport;

/// Event type identifier
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    use super::EventType;

    /// Scroll offset changed
    pub const SCROLL: EventType = 30;
    /// Scroll gesture ended (momentum finished)
    pub const SCROLL_END: EventType = 31;
    pub const RESIZE: EventType = 40;
    /// A tab region reported its rendered height
    pub const REGION_LAYOUT: EventType = 45;
    /// The tab strip switched to another page
    pub const TAB_CHANGE: EventType = 46;
    pub const UNMOUNT: EventType = 61;
}

/// An event delivered to a view
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// New vertical content offset of the scroll container
    Scroll { offset: f32 },
    /// The scroll container came to rest
    ScrollEnd,
    /// Region `index` measured its natural (unpadded) content height
    RegionLayout { index: usize, height: f32 },
    /// The tab strip reports page `index` as active
    TabChange { index: usize },
    /// The window was resized
    Resize(Viewport),
    /// The view is being torn down
    Unmount,
}

impl ViewEvent {
    pub fn event_type(&self) -> EventType {
        use event_types::*;
        match self {
            ViewEvent::Scroll { .. } => SCROLL,
            ViewEvent::ScrollEnd => SCROLL_END,
            ViewEvent::RegionLayout { .. } => REGION_LAYOUT,
            ViewEvent::TabChange { .. } => TAB_CHANGE,
            ViewEvent::Resize(_) => RESIZE,
            ViewEvent::Unmount => UNMOUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    #[test]
    fn test_event_types() {
        assert_eq!(ViewEvent::Scroll { offset: 1.0 }.event_type(), event_types::SCROLL);
        assert_eq!(ViewEvent::TabChange { index: 2 }.event_type(), event_types::TAB_CHANGE);
        assert_eq!(
            ViewEvent::Resize(Size::new(390.0, 844.0)).event_type(),
            event_types::RESIZE
        );
    }
}
