//! Scroll-driven section tracking.
//!
//! Scroll events arrive far more often than the screen refreshes. The
//! tracker keeps only the latest sample and arms a [`FrameGate`]; the next
//! refresh runs a single recomputation against that sample.

use log::trace;

use super::page::Section;

/// Vertical span of a mounted section, top-inclusive and bottom-exclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Extents of the tracked sections. A missing entry means the section is
/// not mounted right now.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SectionMap {
    home: Option<Extent>,
    work: Option<Extent>,
}

impl SectionMap {
    pub fn with(mut self, section: Section, extent: Extent) -> Self {
        *self.slot(section) = Some(extent);
        self
    }

    pub fn get(&self, section: Section) -> Option<Extent> {
        match section {
            Section::Home => self.home,
            Section::Work => self.work,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_none() && self.work.is_none()
    }

    fn slot(&mut self, section: Section) -> &mut Option<Extent> {
        match section {
            Section::Home => &mut self.home,
            Section::Work => &mut self.work,
        }
    }
}

/// Scroll position reported by the scrollable
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    pub fn new(offset: f32, viewport_height: f32) -> Self {
        Self {
            offset,
            viewport_height,
        }
    }

    /// Point one third of the way down the viewport.
    pub fn probe(&self) -> f32 {
        self.offset + self.viewport_height / 3.0
    }
}

/// First tracked section containing `probe`, in priority order.
pub fn active_section(probe: f32, sections: &SectionMap) -> Option<Section> {
    Section::TRACKED.into_iter().find(|&section| {
        sections
            .get(section)
            .is_some_and(|extent| extent.contains(probe))
    })
}

/// Single-flight flag: at most one pending callback at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Arms the gate. Returns `false` if it was already armed.
    pub fn schedule(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Disarms the gate. Returns `true` if the callback should run.
    pub fn fire(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Follows the landing page scroll position and reports the section in view
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    attached: bool,
    gate: FrameGate,
    latest: Option<ScrollSample>,
    recomputations: u64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts listening. Called when the landing page is mounted.
    pub fn attach(&mut self) {
        if !self.attached {
            trace!("scroll tracker attached");
        }
        self.attached = true;
    }

    /// Stops listening and drops any pending recomputation.
    pub fn detach(&mut self) {
        if self.attached {
            trace!("scroll tracker detached");
        }
        self.attached = false;
        self.gate.cancel();
        self.latest = None;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a refresh callback is needed.
    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Records a scroll event. Returns `true` if this event scheduled a new
    /// recomputation, `false` if it was coalesced or ignored.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> bool {
        if !self.attached {
            return false;
        }
        self.latest = Some(sample);
        self.gate.schedule()
    }

    /// Display refresh callback. Runs the pending recomputation, if any, and
    /// returns the matching section. `None` leaves the active section as is.
    pub fn on_frame(&mut self, sections: &SectionMap) -> Option<Section> {
        if !self.gate.fire() {
            return None;
        }
        self.recomputations += 1;

        let sample = self.latest?;
        let probe = sample.probe();
        let section = active_section(probe, sections);
        trace!("probe {probe:.1} -> {section:?}");
        section
    }
}
