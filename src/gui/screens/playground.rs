use std::convert::Infallible;

use iced::{
    Alignment, ContentFit, Element, Length, Padding, Task, mouse,
    widget::{
        Row, button, center, column, container, image, mouse_area, opaque, row, scrollable, space,
        stack, text,
    },
};

use crate::{
    Assets, content,
    core::{ClickTarget, Lightbox},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{fill, heading, palette},
    },
    models::GalleryItem,
};

const TILE_WIDTH: f32 = 300.0;
const TILE_HEIGHT: f32 = 224.0;

/// Image gallery with a lightbox
#[derive(Debug, Clone)]
pub struct PlaygroundScreen {
    lightbox: Lightbox,
}

#[derive(Debug, Clone)]
pub enum PlaygroundMessage {
    Open(usize),
    Click(ClickTarget),
    Close,
}

type Msg = ScreenMessage<PlaygroundScreen>;

fn msg(message: PlaygroundMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

impl PlaygroundScreen {
    pub fn new() -> Self {
        Self {
            lightbox: Lightbox::new(&content::GALLERY),
        }
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }
}

impl Default for PlaygroundScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for PlaygroundScreen {
    type Message = PlaygroundMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        let tiles = self
            .lightbox
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| tile(index, item, &state.assets));

        let gallery = column![
            heading("𐐪𐑂 Playground 𐐪𐑂", palette::BLUSH),
            Row::with_children(tiles).spacing(32).wrap(),
        ]
        .spacing(48)
        .padding(80)
        .max_width(1024.0)
        .align_x(Alignment::Center);

        let page = container(scrollable(container(gallery).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(fill(palette::SKY));

        match self.lightbox.active_item() {
            Some(item) => stack![page, overlay(item, &state.assets)].into(),
            None => page.into(),
        }
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<Msg> {
        match message {
            PlaygroundMessage::Open(index) => {
                self.lightbox.open(index);
            }
            PlaygroundMessage::Click(target) => self.lightbox.click(target),
            PlaygroundMessage::Close => self.lightbox.close(),
        }
        Task::none()
    }
}

fn tile<'a>(index: usize, item: &'static GalleryItem, assets: &Assets) -> Element<'a, Msg> {
    let picture = image(image::Handle::from_path(assets.resolve(item.src)))
        .content_fit(ContentFit::Cover)
        .width(Length::Fixed(TILE_WIDTH))
        .height(Length::Fixed(TILE_HEIGHT));

    let body = column![
        picture,
        text(item.title).size(18),
        text(item.description).size(14).color(palette::MUTED),
    ]
    .spacing(8)
    .padding(Padding {
        bottom: 32.0,
        ..Padding::ZERO
    })
    .width(Length::Fixed(TILE_WIDTH));

    mouse_area(body)
        .on_press(msg(PlaygroundMessage::Open(index)))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Dimmed backdrop with the enlarged image on top.
///
/// The content box is wrapped in `opaque`, so a press inside it never
/// reaches the backdrop's mouse area.
fn overlay<'a>(item: &'static GalleryItem, assets: &Assets) -> Element<'a, Msg> {
    let close = button(text("×").size(20))
        .on_press(msg(PlaygroundMessage::Close))
        .style(button::secondary);

    let body = column![
        row![space::horizontal(), close],
        image(image::Handle::from_path(assets.resolve(item.src)))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(520.0)),
        text(item.title).size(24),
        text(item.description).color(palette::MUTED),
    ]
    .spacing(12)
    .max_width(900.0)
    .align_x(Alignment::Center);

    let content = opaque(mouse_area(body).on_press(msg(PlaygroundMessage::Click(ClickTarget::Content))));

    let backdrop = mouse_area(center(content).padding(40).style(fill(palette::BACKDROP)))
        .on_press(msg(PlaygroundMessage::Click(ClickTarget::Backdrop)));

    opaque(backdrop)
}
