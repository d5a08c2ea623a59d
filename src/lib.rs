pub mod config;
pub mod dataset;
pub mod fake_season;
pub mod ingest;
pub mod outcome;
pub mod render;
pub mod standings;
