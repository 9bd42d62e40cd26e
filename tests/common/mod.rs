#![allow(unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from portfolio for tests
pub use portfolio::core::{
    ClickTarget, Extent, FrameGate, LandingLayout, Lightbox, NavLink, Navigation, Page,
    ScrollSample, ScrollTracker, Section, SectionMap, SmoothScroll, ThemeMode, ViewRouter,
};
