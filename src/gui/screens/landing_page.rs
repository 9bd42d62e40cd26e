use std::convert::Infallible;

use iced::{
    Alignment, ContentFit, Element, Length, Task,
    widget::{Id, Row, button, column, container, image, row, scrollable, text},
};

use crate::{
    Assets, content,
    core::{
        CARD_GAP, CARD_HEIGHT, LandingLayout, ScrollSample, Section, WORK_HEADER_HEIGHT,
        WORK_PADDING,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, chip, fill, heading, link_style, palette},
    },
    models::Project,
};

/// Id of the landing scrollable, the target of anchor scrolling.
pub fn scroll_id() -> Id {
    Id::new("landing")
}

/// Home, work and contact sections in one scrollable
#[derive(Debug, Clone)]
pub struct LandingScreen;

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Scrolled(ScrollSample),
    ScrollTo(Section),
    OpenLink(&'static str),
}

type LandingMessage = ScreenMessage<LandingScreen>;

fn parent(message: ParentMessage) -> LandingMessage {
    ScreenMessage::ParentMessage(message)
}

impl Screen for LandingScreen {
    type Message = Infallible;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, LandingMessage> {
        let layout = &state.layout;
        let sections = column![
            home(layout),
            work(layout, &state.assets),
            contact(layout),
        ];

        scrollable(sections)
            .id(scroll_id())
            .on_scroll(|viewport| {
                parent(ParentMessage::Scrolled(ScrollSample::new(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                )))
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(&mut self, message: Self::Message, _state: &mut AppState) -> Task<LandingMessage> {
        match message {}
    }
}

fn home<'a>(layout: &LandingLayout) -> Element<'a, LandingMessage> {
    let profile = content::PROFILE;
    let hero = column![
        text(profile.name).size(48),
        text(profile.degree).size(24).color(palette::BLUSH),
        text(profile.tagline).color(palette::PINK),
        button(text("⌄").size(32))
            .on_press(parent(ParentMessage::ScrollTo(Section::Work)))
            .style(link_style(palette::ACCENT, false)),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(hero)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(layout.home_height()))
        .style(fill(palette::ORCHID))
        .into()
}

fn work<'a>(layout: &LandingLayout, assets: &Assets) -> Element<'a, LandingMessage> {
    let cards = content::PROJECTS
        .iter()
        .map(|project| project_card(project, assets));

    let body = column![
        container(heading("Work", palette::BLUSH))
            .center_x(Length::Fill)
            .height(Length::Fixed(WORK_HEADER_HEIGHT)),
        iced::widget::Column::with_children(cards).spacing(CARD_GAP),
    ]
    .max_width(1024.0)
    .padding(WORK_PADDING);

    container(body)
        .center_x(Length::Fill)
        .height(Length::Fixed(layout.work_height()))
        .style(fill(palette::SKY))
        .into()
}

fn project_card<'a>(project: &'static Project, assets: &Assets) -> Element<'a, LandingMessage> {
    let picture = image(image::Handle::from_path(assets.resolve(project.image)))
        .content_fit(ContentFit::Cover)
        .width(Length::FillPortion(1))
        .height(Length::Fill);

    let tags = Row::with_children(project.tech.iter().map(|tag| chip(tag)))
        .spacing(8)
        .wrap();

    let details = column![
        text(project.title).size(24).color(palette::BLUSH),
        text(project.description).color(palette::MUTED),
        tags,
        button(text("View Project ↗"))
            .padding(0)
            .on_press(parent(ParentMessage::OpenLink(project.link)))
            .style(link_style(palette::ACCENT, false)),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    container(row![picture, details].spacing(32).align_y(Alignment::Center))
        .padding(24)
        .height(Length::Fixed(CARD_HEIGHT))
        .clip(true)
        .style(card)
        .into()
}

fn contact<'a>(layout: &LandingLayout) -> Element<'a, LandingMessage> {
    let links = Row::with_children(content::CONTACTS.iter().map(|contact| {
        button(text(contact.label).size(20))
            .on_press(parent(ParentMessage::OpenLink(contact.link)))
            .style(link_style(palette::BLUSH, false))
            .into()
    }))
    .spacing(64);

    container(
        column![heading("Let's Connect", palette::BLUSH), links]
            .spacing(48)
            .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fixed(layout.contact_height()))
    .style(fill(palette::ORCHID))
    .into()
}
