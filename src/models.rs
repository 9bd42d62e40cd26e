/// One picture in the playground gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    /// Asset path, relative to the asset directory
    pub src: &'static str,
    pub alt: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A showcased project on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    /// Asset path, relative to the asset directory
    pub image: &'static str,
    pub link: &'static str,
}

/// An outbound contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub label: &'static str,
    pub link: &'static str,
}

/// Owner details shown in the hero section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub degree: &'static str,
    pub tagline: &'static str,
}
