//! Navigation, scroll tracking and lightbox state.
//!
//! Nothing in here knows about the GUI toolkit; the `gui` module feeds it
//! events and reads the results back.

mod animation;
mod layout;
mod lightbox;
mod page;
mod router;
mod scroll;
mod theme;

pub use animation::{SMOOTH_SCROLL_DURATION, SmoothScroll};
pub use layout::{
    CARD_GAP, CARD_HEIGHT, CONTACT_HEIGHT, HOME_MIN_HEIGHT, LandingLayout, NAV_HEIGHT,
    WORK_HEADER_HEIGHT, WORK_PADDING,
};
pub use lightbox::{ClickTarget, Lightbox};
pub use page::{NavLink, Page, Section};
pub use router::{Navigation, ViewRouter};
pub use scroll::{Extent, FrameGate, ScrollSample, ScrollTracker, SectionMap, active_section};
pub use theme::ThemeMode;
