//! Integration tests for landing geometry and anchor scrolling.

mod common;

use std::time::{Duration, Instant};

use common::*;
use portfolio::core::{CONTACT_HEIGHT, HOME_MIN_HEIGHT, NAV_HEIGHT};

#[test]
fn test_sections_are_contiguous() {
    let layout = LandingLayout::new(736.0, 3);
    let sections = layout.sections();

    let home = sections.get(Section::Home).expect("home is mounted");
    let work = sections.get(Section::Work).expect("work is mounted");
    assert_eq!(home.top, 0.0);
    assert_eq!(home.bottom(), work.top);
    assert_eq!(layout.total_height(), work.bottom() + CONTACT_HEIGHT);
}

#[test]
fn test_sections_grow_with_viewport() {
    let small = LandingLayout::new(200.0, 1);
    assert_eq!(small.home_height(), HOME_MIN_HEIGHT);

    let tall = LandingLayout::new(2400.0, 1);
    assert_eq!(tall.home_height(), 2400.0);
    assert_eq!(tall.work_height(), 2400.0);
    assert!(tall.work_height() > small.work_height());
}

#[test]
fn test_window_height_excludes_nav_bar() {
    let layout = LandingLayout::for_window(800.0, 3);
    assert_eq!(layout.viewport_height(), 800.0 - NAV_HEIGHT);
}

#[test]
fn test_set_viewport_height_reports_change() {
    let mut layout = LandingLayout::new(600.0, 3);
    assert!(!layout.set_viewport_height(600.0));
    assert!(layout.set_viewport_height(900.0));
    assert_eq!(layout.viewport_height(), 900.0);
}

#[test]
fn test_scroll_target_within_range() {
    let layout = LandingLayout::new(736.0, 3);
    assert_eq!(layout.scroll_target(Section::Home), 0.0);
    assert_eq!(layout.scroll_target(Section::Work), layout.home_height());

    for viewport in [200.0, 736.0, 5000.0] {
        let layout = LandingLayout::new(viewport, 3);
        let max_offset = layout.total_height() - layout.viewport_height();
        assert!(layout.scroll_target(Section::Work) <= max_offset);
    }
}

#[test]
fn test_smooth_scroll_endpoints() {
    let start = Instant::now();
    let duration = Duration::from_millis(400);
    let scroll = SmoothScroll::with_duration(100.0, 900.0, start, duration);

    assert_eq!(scroll.offset_at(start), 100.0);
    assert!(!scroll.is_finished_at(start));

    let end = start + duration;
    assert_eq!(scroll.offset_at(end), 900.0);
    assert!(scroll.is_finished_at(end));
    assert_eq!(scroll.offset_at(end + Duration::from_secs(1)), 900.0);
}

#[test]
fn test_smooth_scroll_is_monotonic() {
    let start = Instant::now();
    let scroll = SmoothScroll::with_duration(0.0, 1000.0, start, Duration::from_millis(500));

    let offsets: Vec<f32> = (0..=50)
        .map(|step| scroll.offset_at(start + Duration::from_millis(step * 10)))
        .collect();
    assert!(offsets.windows(2).all(|pair| pair[0] <= pair[1]));

    let halfway = scroll.offset_at(start + Duration::from_millis(250));
    assert!((halfway - 500.0).abs() < 1.0);
}

#[test]
fn test_smooth_scroll_upwards() {
    let start = Instant::now();
    let scroll = SmoothScroll::with_duration(800.0, 0.0, start, Duration::from_millis(300));
    let middle = scroll.offset_at(start + Duration::from_millis(150));
    assert!(middle < 800.0 && middle > 0.0);
    assert_eq!(scroll.target(), 0.0);
}

#[test]
fn test_zero_duration_finishes_immediately() {
    let start = Instant::now();
    let scroll = SmoothScroll::with_duration(0.0, 640.0, start, Duration::ZERO);
    assert!(scroll.is_finished_at(start));
    assert_eq!(scroll.offset_at(start), 640.0);
}

#[test]
fn test_theme_toggle_round_trip() {
    let mut theme = ThemeMode::default();
    assert_eq!(theme, ThemeMode::Dark);

    theme.toggle();
    assert_eq!(theme, ThemeMode::Light);
    theme.toggle();
    assert_eq!(theme, ThemeMode::Dark);
}
