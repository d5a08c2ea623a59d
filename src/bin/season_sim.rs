use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use env_logger::Env;
use rand::SeedableRng;
use rand::rngs::StdRng;

use league_table::dataset;
use league_table::fake_season::{FakeSeasonConfig, generate_season};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut cfg = FakeSeasonConfig::default();
    if let Some(n) = arg_value("--teams").and_then(|v| v.parse::<usize>().ok()) {
        cfg.teams = n.clamp(2, 40);
    }
    if let Some(g) = arg_value("--max-goals").and_then(|v| v.parse::<u32>().ok()) {
        cfg.max_goals = g.min(15);
    }
    if let Some(d) = arg_value("--start") {
        cfg.start_date = NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .with_context(|| format!("invalid --start date {d:?}"))?;
    }
    if let Some(name) = arg_value("--name") {
        cfg.name = name;
    }
    let seed = arg_value("--seed")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(2026);

    let mut rng = StdRng::seed_from_u64(seed);
    let season = generate_season(&cfg, &mut rng);
    log::info!(
        "generated {:?}: {} teams, {} rounds, {} matches (seed {seed})",
        season.name,
        cfg.teams,
        season.rounds.len(),
        season.match_count()
    );

    let json = dataset::season_to_json(&season)?;
    match arg_value("--out") {
        Some(out) => {
            let path = PathBuf::from(out);
            fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
            println!("Season written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn arg_value(name: &str) -> Option<String> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let prefix = format!("{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name {
            let Some(next) = args.get(idx + 1) else {
                continue;
            };
            if !next.trim().is_empty() && !next.starts_with("--") {
                return Some(next.clone());
            }
        }
    }
    None
}
