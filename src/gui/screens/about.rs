use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{Row, column, container, scrollable, text},
};

use crate::{
    content,
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, fill, heading, palette},
    },
};

#[derive(Debug, Clone)]
pub struct AboutScreen;

impl Screen for AboutScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let skills = Row::with_children(content::SKILLS.iter().map(|skill| {
            container(text(*skill).color(palette::BLUSH))
                .padding(16)
                .width(Length::Fixed(200.0))
                .style(card)
                .into()
        }))
        .spacing(16)
        .wrap();

        let body = column![
            heading("⋆˚✿˖° About Me ૮ • ﻌ - ა", palette::PLUM),
            text(content::ABOUT).color(palette::MUTED),
            skills,
        ]
        .spacing(48)
        .padding(80)
        .max_width(768.0);

        container(scrollable(container(body).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(fill(palette::SAGE))
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
