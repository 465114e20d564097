mod league_ui;
mod library_ui;
mod state;
mod ui;

use crate::api::{BackendClient, ProcessingMode};
use crate::config::Config;
use crate::league::{
    coaches_table, csv, fixtures_table, leaderboard_table, player_stats_table, profiles_table,
    squad_table, standings_table, transfers_table, TableData,
};
use crate::session::{
    ProgressAnimation, SelectedVideo, SessionController, SessionStatus,
};

pub use state::{
    count_label, FetchResult, LeagueState, LibraryState, Notice, StatsForm, StatsState, StatsView,
    Tab,
};

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::{egui, App};
use rfd::FileDialog;
use tokio::runtime::Handle;
use tracing::{error, info, warn};

const REPAINT_WHILE_BUSY: Duration = Duration::from_millis(100);

pub struct DeepVisionApp {
    runtime: Handle,
    client: Arc<BackendClient>,
    config: Config,
    controller: SessionController<BackendClient>,
    progress: ProgressAnimation,
    tab: Tab,
    league: LeagueState,
    stats: StatsState,
    library: LibraryState,
    notice: Option<Notice>,
    ctx: egui::Context,
    fetch_tx: Sender<FetchResult>,
    fetch_rx: Receiver<FetchResult>,
}

impl DeepVisionApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Handle,
        client: Arc<BackendClient>,
        config: Config,
    ) -> Self {
        info!(backend = %client.base_url(), "Initializing DeepVision client");

        let controller = SessionController::new(client.clone(), runtime.clone());
        let (fetch_tx, fetch_rx) = channel();

        let stats = StatsState {
            form: StatsForm {
                league: config.league.league.clone(),
                season: config.league.season.clone(),
                ..Default::default()
            },
            ..Default::default()
        };

        Self {
            runtime,
            client,
            league: LeagueState::from_config(&config.league),
            config,
            controller,
            progress: ProgressAnimation::default(),
            tab: Tab::default(),
            stats,
            library: LibraryState::default(),
            notice: None,
            ctx: cc.egui_ctx.clone(),
            fetch_tx,
            fetch_rx,
        }
    }

    /// Run a one-shot request on the runtime and hand its result back to
    /// the UI thread.
    fn spawn_fetch<F>(&self, fetch: F)
    where
        F: Future<Output = FetchResult> + Send + 'static,
    {
        let tx = self.fetch_tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let result = fetch.await;
            let _ = tx.send(result);
            ctx.request_repaint();
        });
    }

    // ------------------------------------------------------------- session

    pub fn select_video(&mut self, path: &Path) {
        let video = match SelectedVideo::from_path(path) {
            Ok(video) => video,
            Err(e) => {
                warn!(path = ?path, error = %e, "Could not read selected file");
                self.notice = Some(Notice::error(e.to_string()));
                return;
            }
        };

        match self.controller.select_file(video) {
            Ok(()) => {
                self.progress.reset();
                self.notice = None;
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    pub fn pick_video(&mut self) {
        if let Some(path) = FileDialog::new()
            .add_filter(
                "Videos",
                &["mp4", "mov", "mkv", "webm", "avi", "m4v", "mpeg", "mpg", "wmv", "ogv", "3gp"],
            )
            .pick_file()
        {
            self.select_video(&path);
        }
    }

    pub fn start_job(&mut self, mode: ProcessingMode) {
        match self.controller.start(mode) {
            Ok(()) => {
                self.progress.start(Instant::now());
                self.notice = None;
            }
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    pub fn reset_session(&mut self) {
        self.controller.reset();
        self.progress.reset();
        self.notice = None;
    }

    pub fn download_result(&mut self) {
        let session = self.controller.session();
        let Some(url) = session.result_url.clone() else {
            return;
        };
        let Some(dest) = FileDialog::new()
            .set_file_name(session.download_name())
            .save_file()
        else {
            return;
        };
        self.download(url, dest);
    }

    fn download(&mut self, url: String, dest: PathBuf) {
        self.notice = Some(Notice::info(format!("Downloading to {}…", dest.display())));
        let client = self.client.clone();
        self.spawn_fetch(async move {
            let result = client.download(&url, &dest).await;
            FetchResult::Downloaded(dest, result)
        });
    }

    pub fn open_url(&mut self, url: &str) {
        if let Err(e) = open::that(url) {
            warn!(url, error = %e, "Could not open URL");
            self.notice = Some(Notice::error(format!("Could not open {}: {}", url, e)));
        }
    }

    // -------------------------------------------------------------- league

    pub fn load_fixtures(&mut self) {
        self.remember_league();
        self.league.loading_fixtures = true;
        self.league.error = None;
        let client = self.client.clone();
        let league = crate::league::league_param(&self.league.league);
        let season = self.league.season.trim().to_string();
        let timezone = self.league.timezone.trim().to_string();
        self.spawn_fetch(async move {
            FetchResult::Fixtures(client.fixtures(&league, &season, &timezone).await)
        });
    }

    pub fn load_standings(&mut self) {
        self.remember_league();
        self.league.loading_standings = true;
        self.league.error = None;
        let client = self.client.clone();
        let league = crate::league::league_param(&self.league.league);
        let season = self.league.season.trim().to_string();
        self.spawn_fetch(async move {
            FetchResult::Standings(client.standings(&league, &season).await)
        });
    }

    /// Persist the league selection so the next launch starts from it.
    fn remember_league(&mut self) {
        let league = &mut self.config.league;
        let season = self.league.season.trim();
        let timezone = self.league.timezone.trim();
        if league.league == self.league.league
            && league.season == season
            && league.timezone == timezone
        {
            return;
        }

        league.league = self.league.league.clone();
        league.season = season.to_string();
        league.timezone = timezone.to_string();
        if let Err(e) = Config::save_league(league) {
            warn!(error = %e, "Could not save league selection");
        }
    }

    pub fn load_stats(&mut self, view: StatsView) {
        self.stats.view = view;
        self.stats.loading = true;
        self.stats.error = None;

        let client = self.client.clone();
        let query = self.stats.form.query_for(view);
        self.spawn_fetch(async move {
            let table = match view {
                StatsView::Profiles => client.players(&query).await.map(|e| profiles_table(&e)),
                StatsView::PlayerStats => {
                    client.players(&query).await.map(|e| player_stats_table(&e))
                }
                StatsView::Squad => client.squads(&query).await.map(|s| squad_table(&s)),
                StatsView::Coaches => client.coaches(&query).await.map(|c| coaches_table(&c)),
                StatsView::Leaderboard(kind) => client
                    .leaderboard(kind, &query)
                    .await
                    .map(|e| leaderboard_table(kind, &e)),
                StatsView::Transfers => {
                    client.transfers(&query).await.map(|t| transfers_table(&t))
                }
            };
            FetchResult::Stats(view, table)
        });
    }

    pub fn export_table(&mut self, table: &TableData, default_name: &str) {
        let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(default_name)
            .save_file()
        else {
            return;
        };

        match csv::write_csv(&path, table) {
            Ok(()) => {
                info!(path = ?path, rows = table.nrows(), "Table exported");
                self.notice = Some(Notice::info(format!("Saved {}", path.display())));
            }
            Err(e) => {
                error!(path = ?path, error = %e, "CSV export failed");
                self.notice = Some(Notice::error(format!("Export failed: {}", e)));
            }
        }
    }

    // ------------------------------------------------------------- library

    pub fn refresh_videos(&mut self) {
        self.library.loading_videos = true;
        let client = self.client.clone();
        self.spawn_fetch(async move { FetchResult::Videos(client.list_videos().await) });
    }

    pub fn refresh_outputs(&mut self) {
        self.library.loading_outputs = true;
        let client = self.client.clone();
        self.spawn_fetch(async move { FetchResult::Outputs(client.list_output_videos().await) });
    }

    pub fn delete_video(&mut self, name: String) {
        let client = self.client.clone();
        self.spawn_fetch(async move {
            let result = client.delete_video(&name).await;
            FetchResult::Deleted(name, result)
        });
    }

    pub fn open_video(&mut self, name: &str) {
        match self.client.video_url(name) {
            Ok(url) => self.open_url(url.as_str()),
            Err(e) => self.notice = Some(Notice::error(e.to_string())),
        }
    }

    pub fn download_output(&mut self, name: &str) {
        let url = match self.client.output_download_url(name) {
            Ok(url) => url,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return;
            }
        };
        if let Some(dest) = FileDialog::new().set_file_name(name).save_file() {
            self.download(url.to_string(), dest);
        }
    }

    // ------------------------------------------------------------- updates

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if self.controller.pump() {
            match self.controller.status() {
                SessionStatus::Done => self.progress.finish(),
                SessionStatus::Errored => self.progress.reset(),
                _ => {}
            }
        }

        while let Ok(result) = self.fetch_rx.try_recv() {
            self.apply_fetch(result);
        }

        if self.controller.status().is_busy() || self.progress.is_running() {
            ctx.request_repaint_after(REPAINT_WHILE_BUSY);
        }
    }

    fn apply_fetch(&mut self, result: FetchResult) {
        match result {
            FetchResult::Fixtures(result) => {
                self.league.loading_fixtures = false;
                match result {
                    Ok(fixtures) => self.league.fixtures = Some(fixtures_table(&fixtures)),
                    Err(e) => {
                        warn!(error = %e, "Fixtures request failed");
                        self.league.error = Some(format!("Error loading fixtures: {}", e));
                    }
                }
            }
            FetchResult::Standings(result) => {
                self.league.loading_standings = false;
                match result {
                    Ok(standings) => self.league.standings = Some(standings_table(&standings)),
                    Err(e) => {
                        warn!(error = %e, "Standings request failed");
                        self.league.error = Some(format!("Error loading standings: {}", e));
                    }
                }
            }
            FetchResult::Stats(view, result) => {
                // A slower request for a view the user already left.
                if view != self.stats.view {
                    return;
                }
                self.stats.loading = false;
                match result {
                    Ok(table) => self.stats.table = Some(table),
                    Err(e) => {
                        warn!(view = view.label(), error = %e, "Statistics request failed");
                        self.stats.table = None;
                        self.stats.error = Some(e.to_string());
                    }
                }
            }
            FetchResult::Videos(result) => {
                self.library.loading_videos = false;
                self.library.loaded_videos = true;
                match result {
                    Ok(videos) => self.library.videos = videos,
                    Err(e) => self.library.error = Some(format!("Failed to load videos: {}", e)),
                }
            }
            FetchResult::Outputs(result) => {
                self.library.loading_outputs = false;
                self.library.loaded_outputs = true;
                match result {
                    Ok(outputs) => self.library.outputs = outputs,
                    Err(e) => {
                        self.library.error = Some(format!("Failed to load output videos: {}", e))
                    }
                }
            }
            FetchResult::Deleted(name, result) => match result {
                Ok(()) => {
                    self.notice = Some(Notice::info(format!("Deleted {}", name)));
                    self.refresh_videos();
                }
                Err(e) => {
                    self.notice = Some(Notice::error(format!("Delete failed: {}", e)));
                }
            },
            FetchResult::Downloaded(dest, result) => match result {
                Ok(_) => {
                    self.notice = Some(Notice::info(format!("Saved {}", dest.display())));
                }
                Err(e) => {
                    error!(dest = ?dest, error = %e, "Download failed");
                    self.notice = Some(Notice::error(format!("Download failed: {}", e)));
                }
            },
        }
    }
}

impl App for DeepVisionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
