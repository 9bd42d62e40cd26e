/// Requested color scheme.
///
/// Stored and toggled from the nav bar, but not applied to the rendered
/// theme yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    /// Glyph for the toggle button: the mode a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "☾",
        }
    }
}
