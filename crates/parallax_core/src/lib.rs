//! Parallax Tabs Core Runtime
//!
//! Foundational primitives shared by the parallax tabs layout engine:
//!
//! - **Scroll Signal**: one offset cell fanned out on a fast binding channel
//!   and a synchronous logic channel
//! - **Colors**: RGBA colors with CSS-style parsing and hex formatting
//! - **Events**: the events a host delivers to a mounted view
//! - **Clock**: injectable time source for cooldown windows

pub mod clock;
pub mod color;
pub mod events;
pub mod geometry;
pub mod signal;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{Color, ColorParseError};
pub use events::{EventType, ViewEvent};
pub use geometry::{Size, Viewport};
pub use signal::{
    BindingId, Channel, ListenerId, ScrollSample, ScrollSignal, DEFAULT_PENDING_CAPACITY,
};
