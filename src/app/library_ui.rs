use super::{count_label, DeepVisionApp, Notice};

use eframe::egui::{self, Color32, RichText};

enum LibraryAction {
    Open(String),
    Delete(String),
    OpenOutput(String),
    DownloadOutput(String),
}

impl DeepVisionApp {
    pub(super) fn render_library(&mut self, ui: &mut egui::Ui) {
        if !self.library.loaded_videos && !self.library.loading_videos {
            self.refresh_videos();
        }
        if !self.library.loaded_outputs && !self.library.loading_outputs {
            self.refresh_outputs();
        }

        let mut action = None;

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.heading("Uploaded videos");
            ui.label(
                RichText::new(count_label(self.library.videos.len()))
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            if ui.button("🔄 Refresh").clicked() {
                self.library.error = None;
                self.refresh_videos();
            }
            if self.library.loading_videos {
                ui.spinner();
            }
        });

        if let Some(error) = &self.library.error {
            ui.colored_label(Color32::from_rgb(220, 50, 50), error);
        }

        ui.group(|ui| {
            if self.library.videos.is_empty() {
                ui.label("No videos uploaded yet.");
            }
            for name in &self.library.videos {
                ui.horizontal(|ui| {
                    ui.label(format!("🎬 {}", name));
                    if ui.small_button("▶ Play").clicked() {
                        action = Some(LibraryAction::Open(name.clone()));
                    }
                    if ui.small_button("🗑 Delete").clicked() {
                        action = Some(LibraryAction::Delete(name.clone()));
                    }
                });
            }
        });

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            ui.heading("Processed outputs");
            ui.label(
                RichText::new(count_label(self.library.outputs.len()))
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            if ui.button("🔄 Refresh").clicked() {
                self.library.error = None;
                self.refresh_outputs();
            }
            if self.library.loading_outputs {
                ui.spinner();
            }
        });

        ui.group(|ui| {
            if self.library.outputs.is_empty() {
                ui.label("No processed videos yet.");
            }
            for name in &self.library.outputs {
                ui.horizontal(|ui| {
                    ui.label(format!("✨ {}", name));
                    if ui.small_button("▶ Open").clicked() {
                        action = Some(LibraryAction::OpenOutput(name.clone()));
                    }
                    if ui.small_button("⬇ Download").clicked() {
                        action = Some(LibraryAction::DownloadOutput(name.clone()));
                    }
                });
            }
        });

        match action {
            Some(LibraryAction::Open(name)) => self.open_video(&name),
            Some(LibraryAction::Delete(name)) => self.delete_video(name),
            Some(LibraryAction::OpenOutput(name)) => match self.client.output_download_url(&name) {
                Ok(url) => self.open_url(url.as_str()),
                Err(e) => self.notice = Some(Notice::error(e.to_string())),
            },
            Some(LibraryAction::DownloadOutput(name)) => self.download_output(&name),
            None => {}
        }
    }
}
