use std::{convert::Infallible, path::PathBuf};

use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, text},
};
use log::{error, warn};
use rfd::AsyncFileDialog;

use crate::{
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::{card, fill, heading, palette},
    },
    links, resume,
};

/// Resume download page
#[derive(Debug, Clone, Default)]
pub struct ResumeScreen {
    saving: bool,
    status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ResumeMessage {
    Download,
    /// `Ok(None)` means the save dialog was cancelled
    Saved(Result<Option<PathBuf>, String>),
    Open,
}

impl ResumeScreen {
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl Screen for ResumeScreen {
    type Message = ResumeMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let download = button(text(if self.saving {
            "Saving…"
        } else {
            "Download Resume"
        }))
        .padding([12, 24])
        .on_press_maybe(
            (!self.saving).then_some(ScreenMessage::ScreenMessage(ResumeMessage::Download)),
        );

        let open = button(text("Open Resume ↗"))
            .padding([12, 24])
            .style(button::secondary)
            .on_press(ScreenMessage::ScreenMessage(ResumeMessage::Open));

        let mut panel = column![
            text("View/download my current resume").color(palette::MUTED),
            row![download, open].spacing(16),
        ]
        .spacing(24);
        if let Some(status) = &self.status {
            panel = panel.push(text(status.as_str()).size(14).color(palette::BLUSH));
        }

        let body = column![
            heading("Resume ˙ᵕ˙", palette::BLUSH),
            container(panel).padding(32).width(Length::Fill).style(card),
        ]
        .spacing(48)
        .padding(80)
        .max_width(768.0);

        container(body)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .style(fill(palette::PANEL))
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ResumeMessage::Download => {
                if self.saving {
                    return Task::none();
                }
                self.saving = true;
                self.status = None;
                Task::perform(download(state.assets.resume()), |result| {
                    ScreenMessage::ScreenMessage(ResumeMessage::Saved(result))
                })
            }
            ResumeMessage::Saved(result) => {
                self.saving = false;
                match result {
                    Ok(Some(path)) => self.status = Some(format!("Saved to {}", path.display())),
                    Ok(None) => {}
                    Err(e) => {
                        error!("resume download failed: {e}");
                        self.status = Some(format!("Could not save resume: {e}"));
                    }
                }
                Task::none()
            }
            ResumeMessage::Open => {
                let path = state.assets.resume();
                if !path.is_file() {
                    warn!("resume not found at {}", path.display());
                    self.status = Some(format!("Resume not found at {}", path.display()));
                    return Task::none();
                }
                if let Err(e) = links::open_external(&path) {
                    let e = anyhow::Error::from(e);
                    warn!("{e:#}");
                    self.status = Some(format!("{e:#}"));
                }
                Task::none()
            }
        }
    }
}

async fn download(source: PathBuf) -> Result<Option<PathBuf>, String> {
    let Some(handle) = AsyncFileDialog::new()
        .set_title("Save Resume")
        .set_file_name(resume::suggested_file_name(&source))
        .add_filter("PDF", &["pdf"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let destination = handle.path().to_path_buf();
    resume::save_resume(&source, &destination)
        .await
        .map(|_| Some(destination))
        .map_err(|e| format!("{:#}", anyhow::Error::from(e)))
}
