//! DeepVision: desktop client for the football analysis backend.

mod api;
mod app;
mod config;
mod error;
mod league;
mod session;
#[cfg(test)]
mod tests;
mod utils;

pub(crate) use error::{AppError, Result as AppResult};

use crate::api::BackendClient;
use crate::app::DeepVisionApp;
use crate::config::Config;

use std::sync::Arc;

use eframe::CreationContext;
use tokio::runtime::Runtime;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "deepvision_client=info";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Err(e) = run() {
        error!("DeepVision failed to start: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let config = Config::load()?;

    let runtime = Runtime::new()?;
    let client = Arc::new(BackendClient::new(&config.backend)?);
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    info!(backend = %config.backend.base_url, "Opening window");

    eframe::run_native(
        "DeepVision",
        options,
        Box::new(move |cc: &CreationContext| {
            Box::new(DeepVisionApp::new(cc, handle, client, config))
        }),
    )
    .map_err(|e| AppError::Startup {
        reason: e.to_string(),
    })?;

    // Stop polling tasks that are still parked on a timer.
    runtime.shutdown_background();
    Ok(())
}
