use super::{DeepVisionApp, Notice, Tab};
use crate::api::ProcessingMode;
use crate::session::{SessionStatus, UploadSession};
use crate::utils::file_size::FileSizeUtils;

use std::time::Instant;

use eframe::egui::{self, Align, Color32, RichText};
use tracing::debug;

const ACCENT: Color32 = Color32::from_rgb(46, 160, 67);
const ERROR: Color32 = Color32::from_rgb(220, 50, 50);

const PHASE_LABELS: [&str; 4] = [
    "Preparing video",
    "Detecting players",
    "Tracking movement",
    "Rendering output",
];

impl DeepVisionApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("DeepVision");
                ui.add_space(12.0);
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.label());
                }
            });
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            self.render_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::Upload => self.render_upload(ui),
                Tab::League => self.render_league(ui),
                Tab::Statistics => self.render_statistics(ui),
                Tab::Library => self.render_library(ui),
            });
        });
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(path) = dropped.into_iter().find_map(|f| f.path) else {
            return;
        };
        self.tab = Tab::Upload;
        if !self.controller.status().accepts_new_file() {
            debug!(path = ?path, "Ignoring drop while a job is running");
            self.notice = Some(Notice::error(
                "A job is running. Cancel it before choosing another video.",
            ));
            return;
        }
        self.select_video(&path);
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        let session = self.controller.session().clone();
        let status = session.status;

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Upload & Analyze");
            ui.add_space(5.0);
            ui.label(
                RichText::new("Upload a match video to detect players and track the ball")
                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
        });
        ui.add_space(20.0);

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.add_enabled_ui(status.accepts_new_file(), |ui| {
                    if ui.button("📁 Select Video").clicked() {
                        self.pick_video();
                    }
                });
                ui.label(
                    RichText::new("or drop a file onto the window (max 500 MB)")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            if let Some(file) = &session.file {
                ui.add_space(8.0);
                egui::Grid::new("file_details")
                    .num_columns(2)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label("Name");
                        ui.label(&file.name);
                        ui.end_row();
                        ui.label("Size");
                        ui.label(FileSizeUtils::format_size(file.size));
                        ui.end_row();
                        ui.label("Type");
                        ui.label(&file.mime);
                        ui.end_row();
                        ui.label("Duration");
                        ui.label(
                            file.duration
                                .map(FileSizeUtils::format_duration)
                                .unwrap_or_else(|| "Unknown".to_string()),
                        );
                        ui.end_row();
                    });
            }
        });

        ui.add_space(20.0);

        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let can_start = status == SessionStatus::FileSelected;
                ui.add_enabled_ui(can_start, |ui| {
                    let analyze = egui::Button::new("🔍 Analyze").min_size(egui::vec2(160.0, 36.0));
                    if ui.add(analyze).clicked() {
                        self.start_job(ProcessingMode::Analysis);
                    }
                    let track =
                        egui::Button::new("⚽ Ball tracking").min_size(egui::vec2(160.0, 36.0));
                    if ui.add(track).clicked() {
                        self.start_job(ProcessingMode::BallTracking);
                    }
                });

                if status != SessionStatus::Idle {
                    let label = if status.is_busy() { "✖ Cancel" } else { "🗑 Clear" };
                    if ui.button(label).clicked() {
                        self.reset_session();
                    }
                }
            });
        });

        ui.add_space(20.0);

        if status.is_busy() || status == SessionStatus::Done {
            self.render_progress(ui, &session);
        }

        if status == SessionStatus::Done {
            ui.add_space(10.0);
            ui.group(|ui| {
                ui.colored_label(ACCENT, format!("✅ {}", session.status_label()));
                match &session.result_url {
                    Some(url) => {
                        ui.label(RichText::new(url).monospace());
                        ui.horizontal(|ui| {
                            if ui.button("▶ Open result").clicked() {
                                self.open_url(url);
                            }
                            if ui.button("⬇ Download").clicked() {
                                self.download_result();
                            }
                        });
                    }
                    None => {
                        ui.label("The backend did not report an output location.");
                    }
                }
            });
        }

        if let Some(error) = &session.error {
            ui.add_space(10.0);
            ui.group(|ui| {
                ui.colored_label(ERROR, format!("❌ {}", error));
                ui.label("Clear the session or choose another file to try again.");
            });
        }
    }

    fn render_progress(&self, ui: &mut egui::Ui, session: &UploadSession) {
        let status = session.status;
        let now = Instant::now();
        let percent = self.progress.percent_at(now);
        let phase = self
            .progress
            .phase_at(now)
            .map(|i| PHASE_LABELS[i])
            .unwrap_or(session.status_label());

        ui.group(|ui| {
            ui.horizontal(|ui| {
                if status.is_busy() {
                    ui.spinner();
                }
                ui.label(session.status_label());
                if let Some(mode) = session.mode {
                    ui.label(format!("· {}", mode.label()));
                }
                if let Some(state) = session.job_state.filter(|_| status.is_busy()) {
                    ui.label(format!("· backend: {}", state.label()));
                }
                if let Some(job_id) = &session.job_id {
                    ui.label(
                        RichText::new(format!("job {}", job_id))
                            .monospace()
                            .color(ui.visuals().text_color().gamma_multiply(0.6)),
                    );
                }
            });
            ui.add(
                egui::ProgressBar::new(percent / 100.0)
                    .show_percentage()
                    .animate(false)
                    .fill(ACCENT),
            );
            ui.label(phase);
            if let Some(uploaded) = &session.uploaded_url {
                ui.hyperlink_to("Uploaded original", uploaded);
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Backend: {}", self.config.backend.base_url))
                    .color(ui.visuals().text_color().gamma_multiply(0.6)),
            );
            if let Some(notice) = &self.notice {
                ui.separator();
                let color = if notice.is_error {
                    ERROR
                } else {
                    ui.visuals().text_color()
                };
                ui.colored_label(color, &notice.text);
            }
        });
        ui.add_space(4.0);
    }
}
