//! Integration tests for scroll-driven section tracking.
//!
//! Tests cover:
//! - Probe position and section membership
//! - Coalescing bursts of scroll events into one recomputation
//! - Attach/detach behavior
//! - Sections that are not mounted

mod common;

use common::*;
use portfolio::core::active_section;

fn tracker() -> ScrollTracker {
    let mut tracker = ScrollTracker::new();
    tracker.attach();
    tracker
}

#[test]
fn test_probe_is_one_third_down_the_viewport() {
    assert_eq!(ScrollSample::new(0.0, 300.0).probe(), 100.0);
    assert_eq!(ScrollSample::new(500.0, 900.0).probe(), 800.0);
}

#[test]
fn test_probe_selects_section() {
    let sections = two_sections();

    let mut tracker = tracker();
    tracker.on_scroll(ScrollSample::new(0.0, 300.0));
    assert_eq!(tracker.on_frame(&sections), Some(Section::Home));

    tracker.on_scroll(ScrollSample::new(750.0, 300.0));
    assert_eq!(tracker.on_frame(&sections), Some(Section::Work));

    // Probe 2000 is past both sections: no match, caller keeps its section
    tracker.on_scroll(ScrollSample::new(1900.0, 300.0));
    assert_eq!(tracker.on_frame(&sections), None);
}

#[test]
fn test_extent_bounds() {
    let sections = two_sections();
    assert_eq!(active_section(0.0, &sections), Some(Section::Home));
    assert_eq!(active_section(799.9, &sections), Some(Section::Home));
    assert_eq!(active_section(800.0, &sections), Some(Section::Work));
    assert_eq!(active_section(1600.0, &sections), None);
    assert_eq!(active_section(-1.0, &sections), None);
}

#[test]
fn test_burst_of_scroll_events_recomputes_once() {
    let sections = two_sections();
    let mut tracker = tracker();

    let scheduled = (0..50)
        .filter(|i| tracker.on_scroll(ScrollSample::new(*i as f32 * 20.0, 300.0)))
        .count();
    assert_eq!(scheduled, 1);
    assert!(tracker.is_pending());

    // Latest sample wins: 980 + 100 lands in work
    assert_eq!(tracker.on_frame(&sections), Some(Section::Work));
    assert_eq!(tracker.recomputations(), 1);

    // Nothing pending until the next scroll
    assert!(!tracker.is_pending());
    assert_eq!(tracker.on_frame(&sections), None);
    assert_eq!(tracker.recomputations(), 1);
}

#[test]
fn test_one_recomputation_per_refresh_interval() {
    let sections = two_sections();
    let mut tracker = tracker();

    for frame in 0..3 {
        for i in 0..10 {
            tracker.on_scroll(ScrollSample::new((frame * 10 + i) as f32, 300.0));
        }
        tracker.on_frame(&sections);
    }
    assert_eq!(tracker.recomputations(), 3);
}

#[test]
fn test_detached_tracker_ignores_scrolls() {
    let sections = two_sections();
    let mut tracker = ScrollTracker::new();
    assert!(!tracker.is_attached());

    assert!(!tracker.on_scroll(ScrollSample::new(900.0, 300.0)));
    assert!(!tracker.is_pending());
    assert_eq!(tracker.on_frame(&sections), None);
    assert_eq!(tracker.recomputations(), 0);
}

#[test]
fn test_detach_drops_pending_recomputation() {
    let sections = two_sections();
    let mut tracker = tracker();

    tracker.on_scroll(ScrollSample::new(900.0, 300.0));
    tracker.detach();
    assert!(!tracker.is_pending());
    assert_eq!(tracker.on_frame(&sections), None);

    // Re-attaching does not resurrect the old sample
    tracker.attach();
    assert!(!tracker.is_pending());
    assert_eq!(tracker.on_frame(&sections), None);
    assert_eq!(tracker.recomputations(), 0);
}

#[test]
fn test_absent_sections_are_skipped() {
    let work_only = SectionMap::default().with(Section::Work, Extent::new(800.0, 800.0));
    assert_eq!(active_section(100.0, &work_only), None);
    assert_eq!(active_section(900.0, &work_only), Some(Section::Work));

    let mut tracker = tracker();
    tracker.on_scroll(ScrollSample::new(0.0, 300.0));
    assert_eq!(tracker.on_frame(&SectionMap::default()), None);
    assert_eq!(tracker.recomputations(), 1);
}

#[test]
fn test_frame_gate_is_single_flight() {
    let mut gate = FrameGate::default();
    assert!(!gate.fire());

    assert!(gate.schedule());
    assert!(!gate.schedule());
    assert!(gate.is_pending());

    assert!(gate.fire());
    assert!(!gate.fire());

    assert!(gate.schedule());
    gate.cancel();
    assert!(!gate.fire());
}
