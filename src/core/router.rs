use log::debug;

use super::page::{NavLink, Page, Section};

/// Result of a navigation action.
///
/// The router only assigns state; mounting the page and scrolling are left
/// to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub page: Page,
    /// Page that was current before the action
    pub previous: Page,
    /// Landing anchor to scroll to once the page is shown
    pub scroll_to: Option<Section>,
}

impl Navigation {
    pub fn page_changed(&self) -> bool {
        self.page != self.previous
    }
}

/// Current page and active landing section
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    page: Page,
    section: Section,
}

impl ViewRouter {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            section: Section::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns the page that was replaced.
    pub fn set_page(&mut self, page: Page) -> Page {
        let previous = std::mem::replace(&mut self.page, page);
        if previous != page {
            debug!("page {previous} -> {page}");
        }
        previous
    }

    pub fn set_section(&mut self, section: Section) {
        if self.section != section {
            debug!("active section {} -> {}", self.section.anchor(), section.anchor());
            self.section = section;
        }
    }

    /// Brand mark: back to the landing page, scrolled to the top.
    pub fn brand(&mut self) -> Navigation {
        let previous = self.set_page(Page::Landing);
        Navigation {
            page: Page::Landing,
            previous,
            scroll_to: Some(Section::Home),
        }
    }

    /// Follows a nav bar link.
    ///
    /// Section links only scroll when the landing page was already shown;
    /// otherwise the freshly mounted page starts at the top.
    pub fn follow(&mut self, link: NavLink) -> Navigation {
        let page = link.destination();
        let previous = self.set_page(page);
        let scroll_to = link.section().filter(|_| previous == Page::Landing);
        Navigation {
            page,
            previous,
            scroll_to,
        }
    }

    pub fn is_active(&self, link: NavLink) -> bool {
        link.is_active(self.page, self.section)
    }
}
