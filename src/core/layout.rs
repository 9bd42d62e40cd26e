//! Landing page geometry.
//!
//! The landing view sizes its sections with these numbers, so the extents
//! handed to the scroll tracker always match what is drawn.

use super::page::Section;
use super::scroll::{Extent, SectionMap};

pub const NAV_HEIGHT: f32 = 64.0;
pub const HOME_MIN_HEIGHT: f32 = 480.0;
pub const WORK_PADDING: f32 = 80.0;
pub const WORK_HEADER_HEIGHT: f32 = 96.0;
pub const CARD_HEIGHT: f32 = 280.0;
pub const CARD_GAP: f32 = 48.0;
pub const CONTACT_HEIGHT: f32 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingLayout {
    viewport_height: f32,
    project_count: usize,
}

impl LandingLayout {
    pub fn new(viewport_height: f32, project_count: usize) -> Self {
        Self {
            viewport_height: viewport_height.max(0.0),
            project_count,
        }
    }

    /// Viewport height for a window of the given height.
    pub fn for_window(window_height: f32, project_count: usize) -> Self {
        Self::new(window_height - NAV_HEIGHT, project_count)
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Returns `true` if the height changed.
    pub fn set_viewport_height(&mut self, height: f32) -> bool {
        let height = height.max(0.0);
        if (self.viewport_height - height).abs() < f32::EPSILON {
            return false;
        }
        self.viewport_height = height;
        true
    }

    pub fn home_height(&self) -> f32 {
        self.viewport_height.max(HOME_MIN_HEIGHT)
    }

    pub fn work_height(&self) -> f32 {
        let cards = self.project_count as f32 * CARD_HEIGHT;
        let gaps = self.project_count.saturating_sub(1) as f32 * CARD_GAP;
        let content = 2.0 * WORK_PADDING + WORK_HEADER_HEIGHT + cards + gaps;
        content.max(self.viewport_height)
    }

    pub fn contact_height(&self) -> f32 {
        CONTACT_HEIGHT
    }

    pub fn total_height(&self) -> f32 {
        self.home_height() + self.work_height() + self.contact_height()
    }

    pub fn extent(&self, section: Section) -> Extent {
        match section {
            Section::Home => Extent::new(0.0, self.home_height()),
            Section::Work => Extent::new(self.home_height(), self.work_height()),
        }
    }

    pub fn sections(&self) -> SectionMap {
        Section::TRACKED
            .into_iter()
            .fold(SectionMap::default(), |map, section| {
                map.with(section, self.extent(section))
            })
    }

    /// Offset that brings `section` to the top of the viewport, clamped to
    /// the scrollable range.
    pub fn scroll_target(&self, section: Section) -> f32 {
        let max_offset = (self.total_height() - self.viewport_height).max(0.0);
        self.extent(section).top.min(max_offset)
    }
}
