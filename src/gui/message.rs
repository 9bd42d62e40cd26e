use std::time::Instant;

use iced::Size;

use crate::{
    core::NavLink,
    gui::screens::{
        ScreenMessage, about::AboutScreen, landing_page::LandingScreen,
        playground::PlaygroundScreen, resume_page::ResumeScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message {
    /// Brand mark in the nav bar
    Brand,
    Nav(NavLink),
    ToggleTheme,
    /// Display refresh
    Frame(Instant),
    Resized(Size),
    Landing(ScreenMessage<LandingScreen>),
    Playground(ScreenMessage<PlaygroundScreen>),
    About(ScreenMessage<AboutScreen>),
    Resume(ScreenMessage<ResumeScreen>),
}
