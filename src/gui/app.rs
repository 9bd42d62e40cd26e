use std::time::Instant;

use iced::{
    Element, Length, Size, Subscription, Task, Theme,
    widget::{column, container, operation, scrollable::AbsoluteOffset},
    window,
};
use log::{debug, info};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, landing_page},
    widgets::{self, fill, palette},
};
use crate::{
    Config, content,
    core::{NAV_HEIGHT, Navigation, Page},
};

pub struct PortfolioApp {
    state: AppState,
    screen: ScreenData,
}

impl PortfolioApp {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        info!("starting on the {} page", config.start_page);
        (
            Self {
                state: AppState::new(&config),
                screen: ScreenData::for_page(config.start_page),
            },
            Task::none(),
        )
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn screen(&self) -> &ScreenData {
        &self.screen
    }

    pub fn title(&self) -> String {
        let name = content::PROFILE.name;
        match self.screen.page() {
            Page::Landing => name.to_string(),
            Page::Playground => format!("{name} | Playground"),
            Page::About => format!("{name} | About"),
            Page::Resume => format!("{name} | Resume"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Brand => {
                let navigation = self.state.router.brand();
                self.navigate(navigation)
            }
            Message::Nav(link) => {
                let navigation = self.state.router.follow(link);
                self.navigate(navigation)
            }
            Message::ToggleTheme => {
                self.state.theme.toggle();
                debug!("theme flag set to {:?} (not applied)", self.state.theme);
                Task::none()
            }
            Message::Frame(now) => self.on_frame(now),
            Message::Resized(size) => {
                self.state.layout.set_viewport_height(size.height - NAV_HEIGHT);
                Task::none()
            }
            message => self
                .screen
                .update(message, &mut self.state)
                .map(|message| match message {
                    ScreenMessage::ScreenMessage(message) => message,
                    ScreenMessage::ParentMessage(never) => match never {},
                }),
        }
    }

    fn navigate(&mut self, navigation: Navigation) -> Task<Message> {
        if navigation.page_changed() {
            self.screen = ScreenData::for_page(navigation.page);
            self.state.landing_mounted(navigation.page == Page::Landing);
        }
        if let Some(section) = navigation.scroll_to {
            debug!("scrolling to #{}", section.anchor());
            self.state.begin_scroll(section, Instant::now());
        }
        Task::none()
    }

    fn on_frame(&mut self, now: Instant) -> Task<Message> {
        let sections = self.state.sections();
        if let Some(section) = self.state.tracker.on_frame(&sections) {
            self.state.router.set_section(section);
        }

        let Some(animation) = self.state.smooth_scroll else {
            return Task::none();
        };
        let offset = animation.offset_at(now);
        if animation.is_finished_at(now) {
            self.state.smooth_scroll = None;
        }
        operation::scroll_to(landing_page::scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body = self.screen.view(&self.state).map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        });

        container(column![widgets::nav_bar(&self.state), body])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(fill(palette::PAGE))
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Refresh callbacks only while something is waiting for one.
        let frames = if self.state.needs_frames() {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            frames,
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
        ])
    }

    pub fn theme(&self) -> Theme {
        // TODO: map ThemeMode::Light to a light palette; the flag is only stored for now
        Theme::Dark
    }
}

pub fn run(config: Config) -> iced::Result {
    let size = Size::new(config.window_width, config.window_height);
    iced::application(
        move || PortfolioApp::new(config.clone()),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .subscription(PortfolioApp::subscription)
    .theme(PortfolioApp::theme)
    .window_size(size)
    .centered()
    .run()
}
