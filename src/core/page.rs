use std::fmt;

/// Top-level view currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Page {
    /// Home, work and contact sections stacked in one scrollable
    #[default]
    Landing,
    Playground,
    About,
    Resume,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Landing, Page::Playground, Page::About, Page::Resume];
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Landing => "landing",
            Page::Playground => "playground",
            Page::About => "about",
            Page::Resume => "resume",
        };
        f.write_str(name)
    }
}

/// Landing subsection that can be highlighted in the nav bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Work,
}

impl Section {
    /// Priority order used when testing the probe position.
    pub const TRACKED: [Section; 2] = [Section::Home, Section::Work];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Work => "work",
        }
    }
}

/// Entries of the navigation bar, brand mark excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLink {
    Work,
    Playground,
    About,
    Resume,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [
        NavLink::Work,
        NavLink::Playground,
        NavLink::About,
        NavLink::Resume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Work => "Work",
            NavLink::Playground => "Playground",
            NavLink::About => "About",
            NavLink::Resume => "Resume",
        }
    }

    /// Page shown after following the link.
    pub fn destination(self) -> Page {
        match self {
            NavLink::Work => Page::Landing,
            NavLink::Playground => Page::Playground,
            NavLink::About => Page::About,
            NavLink::Resume => Page::Resume,
        }
    }

    /// Landing section the link points at, if any.
    pub fn section(self) -> Option<Section> {
        match self {
            NavLink::Work => Some(Section::Work),
            _ => None,
        }
    }

    /// Highlight rule for the nav bar.
    ///
    /// Section links light up on the landing page when their section is
    /// active; page links light up while their page is shown.
    pub fn is_active(self, page: Page, section: Section) -> bool {
        match self.section() {
            Some(target) => page == Page::Landing && section == target,
            None => page == self.destination(),
        }
    }
}
