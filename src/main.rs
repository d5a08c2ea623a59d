use anyhow::{Context, Result, anyhow};
use env_logger::Env;

use league_table::config::{Config, OutputFormat};
use league_table::dataset;
use league_table::ingest;
use league_table::render;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = Config::from_env();
    config.apply_args(&args);

    let path = config
        .data_path
        .clone()
        .ok_or_else(|| anyhow!("no season data: pass --data=PATH or set STANDINGS_DATA"))?;
    let season = dataset::load_season(&path)?;
    let table = ingest::build_table(&season);
    let rows = table.sorted_standings();

    match config.format {
        OutputFormat::Text => {
            if !season.name.is_empty() {
                println!("{}", season.name);
            }
            print!("{}", render::render_table(&rows, config.form_len));
        }
        OutputFormat::Json => {
            let json = render::standings_json(&rows).context("render standings")?;
            println!("{json}");
        }
    }
    Ok(())
}
