pub mod about;
pub mod landing_page;
pub mod playground;
pub mod resume_page;

use std::time::Instant;

use iced::{Element, Task};
use log::trace;

use crate::{
    core::Page,
    gui::{AppState, Message},
    links,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

/// The mounted page; exactly one variant exists at a time.
#[derive(Debug, Clone)]
pub enum ScreenData {
    Landing(landing_page::LandingScreen),
    Playground(playground::PlaygroundScreen),
    About(about::AboutScreen),
    Resume(resume_page::ResumeScreen),
}

impl ScreenData {
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Landing => ScreenData::Landing(landing_page::LandingScreen),
            Page::Playground => ScreenData::Playground(playground::PlaygroundScreen::new()),
            Page::About => ScreenData::About(about::AboutScreen),
            Page::Resume => ScreenData::Resume(resume_page::ResumeScreen::default()),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            ScreenData::Landing(_) => Page::Landing,
            ScreenData::Playground(_) => Page::Playground,
            ScreenData::About(_) => Page::About,
            ScreenData::Resume(_) => Page::Resume,
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Landing(screen) => screen.view(state).map(Message::Landing),
            ScreenData::Playground(screen) => screen.view(state).map(Message::Playground),
            ScreenData::About(screen) => screen.view(state).map(Message::About),
            ScreenData::Resume(screen) => screen.view(state).map(Message::Resume),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (ScreenData::Landing(page), Message::Landing(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Landing)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    landing_page::ParentMessage::Scrolled(sample) => {
                        state.scroll_offset = sample.offset;
                        state.layout.set_viewport_height(sample.viewport_height);
                        state.tracker.on_scroll(sample);
                        Task::none()
                    }
                    landing_page::ParentMessage::ScrollTo(section) => {
                        state.begin_scroll(section, Instant::now());
                        Task::none()
                    }
                    landing_page::ParentMessage::OpenLink(url) => {
                        links::open_or_log(url);
                        Task::none()
                    }
                },
            },
            (ScreenData::Playground(page), Message::Playground(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Playground)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::About(page), Message::About(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::About)
                .map(ScreenMessage::ScreenMessage),
            (ScreenData::Resume(page), Message::Resume(ScreenMessage::ScreenMessage(msg))) => page
                .update(msg, state)
                .map(Message::Resume)
                .map(ScreenMessage::ScreenMessage),
            (screen, message) => {
                // e.g. a scroll event still in flight after leaving the landing page
                trace!("dropping {message:?} for {} screen", screen.page());
                Task::none()
            }
        }
    }
}
