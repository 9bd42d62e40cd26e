use std::time::Instant;

use crate::{
    Assets, Config, content,
    core::{LandingLayout, Page, ScrollTracker, Section, SectionMap, SmoothScroll, ThemeMode, ViewRouter},
};

/// Application state shared by every screen
#[derive(Debug)]
pub struct AppState {
    pub router: ViewRouter,
    pub tracker: ScrollTracker,
    pub theme: ThemeMode,
    pub layout: LandingLayout,
    pub assets: Assets,
    /// Last known landing scroll offset
    pub scroll_offset: f32,
    pub smooth_scroll: Option<SmoothScroll>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let mut tracker = ScrollTracker::new();
        if config.start_page == Page::Landing {
            tracker.attach();
        }
        Self {
            router: ViewRouter::new(config.start_page),
            tracker,
            theme: ThemeMode::default(),
            layout: LandingLayout::for_window(config.window_height, content::PROJECTS.len()),
            assets: config.assets.clone(),
            scroll_offset: 0.0,
            smooth_scroll: None,
        }
    }

    /// Extents of the landing sections, empty while another page is shown.
    pub fn sections(&self) -> SectionMap {
        match self.router.page() {
            Page::Landing => self.layout.sections(),
            _ => SectionMap::default(),
        }
    }

    pub fn begin_scroll(&mut self, section: Section, now: Instant) {
        let target = self.layout.scroll_target(section);
        self.smooth_scroll = Some(SmoothScroll::new(self.scroll_offset, target, now));
    }

    /// Landing page was mounted or unmounted.
    pub fn landing_mounted(&mut self, mounted: bool) {
        self.scroll_offset = 0.0;
        if mounted {
            self.tracker.attach();
        } else {
            self.tracker.detach();
            self.smooth_scroll = None;
        }
    }

    /// Whether display refresh callbacks are needed.
    pub fn needs_frames(&self) -> bool {
        self.tracker.is_pending() || self.smooth_scroll.is_some()
    }
}
