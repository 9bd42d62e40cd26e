//! Integration tests for page switching and nav highlighting.
//!
//! Tests cover:
//! - Nav links and the brand mark setting the page
//! - Scroll requests issued by "Work" and the brand mark
//! - The highlight rule for section and page links

mod common;

use common::*;

#[test]
fn test_links_set_expected_page() {
    for link in NavLink::ALL {
        let mut router = ViewRouter::new(Page::About);
        let navigation = router.follow(link);

        assert_eq!(navigation.page, link.destination());
        assert_eq!(router.page(), link.destination());
        assert_eq!(navigation.previous, Page::About);
    }

    let mut router = ViewRouter::default();
    assert_eq!(router.follow(NavLink::Playground).page, Page::Playground);
    assert_eq!(router.follow(NavLink::About).page, Page::About);
    assert_eq!(router.follow(NavLink::Resume).page, Page::Resume);
    assert_eq!(router.follow(NavLink::Work).page, Page::Landing);
}

#[test]
fn test_work_scrolls_only_when_already_on_landing() {
    let mut router = ViewRouter::new(Page::Landing);
    let navigation = router.follow(NavLink::Work);
    assert_eq!(navigation.scroll_to, Some(Section::Work));
    assert!(!navigation.page_changed());

    let mut router = ViewRouter::new(Page::Playground);
    let navigation = router.follow(NavLink::Work);
    assert_eq!(navigation.page, Page::Landing);
    assert_eq!(navigation.scroll_to, None);
    assert!(navigation.page_changed());
}

#[test]
fn test_page_links_never_scroll() {
    for link in [NavLink::Playground, NavLink::About, NavLink::Resume] {
        let mut router = ViewRouter::new(Page::Landing);
        assert_eq!(router.follow(link).scroll_to, None);
    }
}

#[test]
fn test_brand_always_returns_home() {
    for page in Page::ALL {
        let mut router = ViewRouter::new(page);
        let navigation = router.brand();

        assert_eq!(
            navigation,
            Navigation {
                page: Page::Landing,
                previous: page,
                scroll_to: Some(Section::Home),
            }
        );
        assert_eq!(router.page(), Page::Landing);
    }
}

#[test]
fn test_work_highlight_follows_active_section() {
    let mut router = ViewRouter::new(Page::Landing);
    assert!(!router.is_active(NavLink::Work));

    router.set_section(Section::Work);
    assert!(router.is_active(NavLink::Work));
    for link in [NavLink::Playground, NavLink::About, NavLink::Resume] {
        assert!(!router.is_active(link), "{link:?} should not be active");
    }

    // Section is remembered but only highlighted on the landing page
    router.follow(NavLink::About);
    assert_eq!(router.section(), Section::Work);
    assert!(!router.is_active(NavLink::Work));
    assert!(router.is_active(NavLink::About));
}

#[test]
fn test_exactly_one_page_link_active_off_landing() {
    for link in [NavLink::Playground, NavLink::About, NavLink::Resume] {
        let mut router = ViewRouter::default();
        router.follow(link);

        let active: Vec<NavLink> = NavLink::ALL
            .into_iter()
            .filter(|&other| router.is_active(other))
            .collect();
        assert_eq!(active, vec![link]);
    }
}
