#![allow(clippy::unwrap_used, clippy::expect_used)]

mod api_types;
mod file_size;
mod league_tables;
mod mp4;
mod stats_form;
mod video;
