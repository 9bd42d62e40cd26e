use log::debug;

use crate::models::GalleryItem;

/// Where a click inside the open lightbox landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dimmed overlay around the content box
    Backdrop,
    /// Enlarged image or its caption
    Content,
}

/// Which gallery item, if any, is enlarged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    items: &'static [GalleryItem],
    active: Option<usize>,
}

impl Lightbox {
    pub fn new(items: &'static [GalleryItem]) -> Self {
        Self {
            items,
            active: None,
        }
    }

    pub fn items(&self) -> &'static [GalleryItem] {
        self.items
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn active_item(&self) -> Option<&'static GalleryItem> {
        self.active.map(|index| &self.items[index])
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Enlarges item `index`, replacing any open item. Indices outside the
    /// gallery are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            debug!("ignoring lightbox open for missing item {index}");
            return false;
        };
        debug!("lightbox open: {}", item.title);
        self.active = Some(index);
        true
    }

    pub fn close(&mut self) {
        if self.active.take().is_some() {
            debug!("lightbox closed");
        }
    }

    /// Only backdrop clicks dismiss the lightbox.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}
