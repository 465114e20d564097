use super::{DeepVisionApp, StatsView};
use crate::api::Leaderboard;
use crate::league::{csv, league_label, status_long, TableData, LEAGUES};

use eframe::egui::{self, RichText};

const STATS_VIEWS: [StatsView; 5] = [
    StatsView::Profiles,
    StatsView::PlayerStats,
    StatsView::Squad,
    StatsView::Coaches,
    StatsView::Transfers,
];

/// Striped grid with a bold header row. Fixture status codes get their long
/// form as a tooltip.
pub(super) fn table_grid(ui: &mut egui::Ui, id: &str, table: &TableData) {
    if table.is_empty() {
        ui.label("No data available.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_source((id, "scroll"))
        .show(ui, |ui| {
            egui::Grid::new(id)
                .striped(true)
                .num_columns(table.ncols())
                .spacing([14.0, 4.0])
                .show(ui, |ui| {
                    for header in &table.headers {
                        ui.label(RichText::new(header).strong());
                    }
                    ui.end_row();

                    for row in &table.rows {
                        for (col, cell) in row.iter().enumerate() {
                            let response = ui.label(cell);
                            if table.headers.get(col).map(String::as_str) == Some("Status") {
                                let long = status_long(cell);
                                if long != cell.as_str() {
                                    response.on_hover_text(long);
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

fn league_picker(ui: &mut egui::Ui, id: &str, league: &mut String) {
    egui::ComboBox::from_id_source(id)
        .selected_text(league_label(league))
        .show_ui(ui, |ui| {
            for (code, _, label) in LEAGUES {
                ui.selectable_value(league, code.to_string(), label);
            }
        });
}

impl DeepVisionApp {
    pub(super) fn render_league(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label("League");
            league_picker(ui, "league_picker", &mut self.league.league);
            ui.label("Season");
            ui.add(egui::TextEdit::singleline(&mut self.league.season).desired_width(60.0));
            ui.label("Timezone");
            ui.add(egui::TextEdit::singleline(&mut self.league.timezone).desired_width(120.0));
        });
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!self.league.loading_fixtures, |ui| {
                if ui.button("📅 Load fixtures").clicked() {
                    self.load_fixtures();
                }
            });
            ui.add_enabled_ui(!self.league.loading_standings, |ui| {
                if ui.button("🏆 Load standings").clicked() {
                    self.load_standings();
                }
            });
            if self.league.loading_fixtures || self.league.loading_standings {
                ui.spinner();
            }
        });

        if let Some(error) = &self.league.error {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
        }

        let league = self.league.league.clone();
        let season = self.league.season.trim().to_string();

        if let Some(standings) = self.league.standings.clone() {
            ui.add_space(14.0);
            ui.horizontal(|ui| {
                ui.heading(format!("{} {} standings", league_label(&league), season));
                if ui.button("⬇ CSV").clicked() {
                    self.export_table(&standings, &csv::export_name("standings", &league, &season));
                }
            });
            table_grid(ui, "standings", &standings);
        }

        if let Some(fixtures) = self.league.fixtures.clone() {
            ui.add_space(14.0);
            ui.horizontal(|ui| {
                ui.heading(format!("Fixtures ({})", fixtures.nrows()));
                if ui.button("⬇ CSV").clicked() {
                    self.export_table(&fixtures, &csv::export_name("fixtures", &league, &season));
                }
            });
            table_grid(ui, "fixtures", &fixtures);
        }
    }

    pub(super) fn render_statistics(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        egui::Grid::new("stats_form")
            .num_columns(4)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                let form = &mut self.stats.form;
                ui.label("League");
                league_picker(ui, "stats_league", &mut form.league);
                ui.label("Season");
                ui.add(egui::TextEdit::singleline(&mut form.season).desired_width(80.0));
                ui.end_row();

                ui.label("Search");
                ui.add(
                    egui::TextEdit::singleline(&mut form.search)
                        .hint_text("player or coach name"),
                );
                ui.label("Team id");
                ui.add(egui::TextEdit::singleline(&mut form.team).desired_width(80.0));
                ui.end_row();

                ui.label("Player id");
                ui.add(egui::TextEdit::singleline(&mut form.player).desired_width(80.0));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.add_enabled_ui(!self.stats.loading, |ui| {
            ui.horizontal_wrapped(|ui| {
                for view in STATS_VIEWS {
                    if ui.button(view.label()).clicked() {
                        self.load_stats(view);
                    }
                }
            });
            ui.horizontal_wrapped(|ui| {
                for kind in Leaderboard::ALL {
                    if ui.button(kind.label()).clicked() {
                        self.load_stats(StatsView::Leaderboard(kind));
                    }
                }
            });
        });

        ui.add_space(10.0);
        if self.stats.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Loading {}…", self.stats.view.label().to_lowercase()));
            });
        }
        if let Some(error) = &self.stats.error {
            ui.colored_label(egui::Color32::from_rgb(220, 50, 50), error);
        }

        if let Some(table) = self.stats.table.clone() {
            ui.horizontal(|ui| {
                ui.heading(self.stats.view.label());
                if ui.button("⬇ CSV").clicked() {
                    self.export_table(&table, "player_statistics.csv");
                }
            });
            table_grid(ui, "stats_table", &table);
        }
    }
}
