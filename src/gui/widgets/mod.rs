use iced::{
    Alignment, Background, Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, space, text},
};
use iced_widget::container::bordered_box;

use crate::{
    content,
    core::{NAV_HEIGHT, NavLink},
    gui::{AppState, Message},
};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color {
        r: r as f32 / 255.0,
        g: g as f32 / 255.0,
        b: b as f32 / 255.0,
        a: 1.0,
    }
}

pub mod palette {
    use super::{Color, rgb};

    pub const PAGE: Color = rgb(0x0f, 0x17, 0x2a);
    pub const PANEL: Color = rgb(0x1e, 0x29, 0x3b);
    pub const ORCHID: Color = rgb(0xb7, 0x6d, 0xa4);
    pub const SKY: Color = rgb(0x74, 0xaf, 0xf9);
    pub const SAGE: Color = rgb(0x84, 0x98, 0x67);
    pub const PLUM: Color = rgb(0xa5, 0x60, 0x94);
    pub const BLUSH: Color = rgb(0xef, 0xde, 0xdf);
    pub const PINK: Color = rgb(0xf1, 0xce, 0xed);
    pub const ACCENT: Color = rgb(0x60, 0xa5, 0xfa);
    pub const MUTED: Color = rgb(0xd1, 0xd5, 0xdb);
    pub const BACKDROP: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.8,
    };
}

/// Solid background fill.
pub fn fill(color: Color) -> impl Fn(&Theme) -> Style {
    move |_theme: &Theme| Style {
        background: Some(Background::Color(color)),
        ..Style::default()
    }
}

/// Rounded translucent card, as used for project cards and panels.
pub fn card(theme: &Theme) -> Style {
    let style = bordered_box(theme).border(border::rounded(8.0));
    style.background(Color {
        a: 0.5,
        ..palette::PANEL
    })
}

/// Small rounded tag.
pub fn chip<'a, M: 'a>(label: &'a str) -> Element<'a, M> {
    container(text(label).size(14).color(palette::ACCENT))
        .padding([4, 12])
        .style(|_theme: &Theme| Style {
            background: Some(Background::Color(Color {
                a: 0.2,
                ..palette::ACCENT
            })),
            border: border::rounded(12.0),
            ..Style::default()
        })
        .into()
}

pub fn heading<'a, M: 'a>(label: &'a str, color: Color) -> Element<'a, M> {
    text(label).size(32).color(color).into()
}

/// Borderless button whose text turns to the accent color when `active`.
pub fn link_style(
    color: Color,
    active: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            text_color: if active || hovered {
                palette::ACCENT
            } else {
                color
            },
            ..button::text(theme, status)
        }
    }
}

fn nav_entry<'a>(link: NavLink, active: bool) -> Element<'a, Message> {
    let label = button(text(link.label()))
        .on_press(Message::Nav(link))
        .style(link_style(palette::MUTED, active));

    let underline = container(space::horizontal())
        .width(Length::Fill)
        .height(2.0)
        .style(fill(if active {
            palette::ACCENT
        } else {
            Color::TRANSPARENT
        }));

    column![label, underline]
        .width(Length::Shrink)
        .align_x(Alignment::Center)
        .into()
}

/// Fixed bar on top of every page.
pub fn nav_bar(state: &AppState) -> Element<'_, Message> {
    let brand = button(text(content::PROFILE.initials).size(22))
        .on_press(Message::Brand)
        .style(link_style(Color::WHITE, false));

    let mut bar = row![brand, space::horizontal()]
        .spacing(32)
        .align_y(Alignment::Center);
    for link in NavLink::ALL {
        bar = bar.push(nav_entry(link, state.router.is_active(link)));
    }
    bar = bar.push(
        button(text(state.theme.icon()))
            .on_press(Message::ToggleTheme)
            .style(link_style(palette::MUTED, false)),
    );

    container(bar.padding([0, 24]))
        .width(Length::Fill)
        .center_y(Length::Fixed(NAV_HEIGHT))
        .style(fill(Color {
            a: 0.8,
            ..palette::PAGE
        }))
        .into()
}
