use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use league_table::dataset::{Match, Season, TeamRef, parse_season_json, season_to_json};
use league_table::fake_season::{FakeSeasonConfig, generate_season};
use league_table::ingest::{IngestSummary, build_table, ingest_season, match_records};
use league_table::outcome::{Outcome, points_for};
use league_table::render::{render_table, standing_rows, standings_json};
use league_table::standings::LeagueTable;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn small_season() -> Season {
    parse_season_json(&read_fixture("season_small.json")).expect("fixture should parse")
}

fn team(code: &str) -> TeamRef {
    TeamRef {
        key: None,
        name: code.to_lowercase(),
        code: code.to_string(),
    }
}

#[test]
fn match_yields_both_perspectives() {
    let m = Match {
        date: None,
        team1: team("HOM"),
        team2: team("AWY"),
        score1: 1,
        score2: 4,
    };
    let [home, away] = match_records(&m);
    assert_eq!(home.code, "HOM");
    assert_eq!((home.scored, home.conceded, home.result), (1, 4, Outcome::Loss));
    assert_eq!(away.code, "AWY");
    assert_eq!((away.scored, away.conceded, away.result), (4, 1, Outcome::Win));
}

#[test]
fn fixture_season_standings() {
    let season = small_season();
    let mut table = LeagueTable::new();
    let summary = ingest_season(&mut table, &season);
    assert_eq!(
        summary,
        IngestSummary {
            rounds: 2,
            matches: 4,
            records: 8,
        }
    );

    let rows = table.sorted_standings();
    let order: Vec<&str> = rows.iter().map(|t| t.code.as_str()).collect();
    assert_eq!(order, vec!["ARS", "MCI", "LIV", "CHE"]);

    let mci = table.get("MCI").unwrap();
    assert_eq!(mci.name, "Manchester City");
    assert_eq!(mci.form, vec![Outcome::Draw, Outcome::Win]);
    assert_eq!((mci.scored, mci.conceded, mci.points), (3, 2, 4));
}

#[test]
fn separate_tables_do_not_share_state() {
    let season = small_season();
    let first = build_table(&season);
    let second = build_table(&season);
    assert_eq!(first.sorted_standings(), second.sorted_standings());
    assert_eq!(first.get("ARS").unwrap().played(), 2);
}

#[test]
fn generated_season_conserves_points() {
    let cfg = FakeSeasonConfig {
        teams: 8,
        ..FakeSeasonConfig::default()
    };
    let season = generate_season(&cfg, &mut StdRng::seed_from_u64(42));

    let mut awarded = 0;
    let mut draws = 0;
    for round in &season.rounds {
        for m in &round.matches {
            let [a, b] = match_records(m);
            let pts = points_for(a.result) + points_for(b.result);
            assert!(pts == 2 || pts == 3);
            awarded += pts;
            if a.result == Outcome::Draw {
                draws += 1;
            }
        }
    }

    let table = build_table(&season);
    assert_eq!(table.len(), 8);
    let rows = table.sorted_standings();
    assert_eq!(rows.iter().map(|t| t.points).sum::<u32>(), awarded);
    assert_eq!(
        rows.iter().map(|t| t.draw_count).sum::<u32>(),
        2 * draws
    );
    assert!(rows.iter().all(|t| t.played() == 14));
    let scored: u32 = rows.iter().map(|t| t.scored).sum();
    let conceded: u32 = rows.iter().map(|t| t.conceded).sum();
    assert_eq!(scored, conceded);
}

#[test]
fn generated_season_survives_json() {
    let cfg = FakeSeasonConfig {
        teams: 4,
        ..FakeSeasonConfig::default()
    };
    let season = generate_season(&cfg, &mut StdRng::seed_from_u64(3));
    let json = season_to_json(&season).expect("season should serialize");
    let back = parse_season_json(&json).expect("season json should parse");
    assert_eq!(back, season);
}

#[test]
fn renders_text_table() {
    let rows = small_season_rows();
    let text = render_table(&rows, 5);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("Pts"));
    assert!(lines[1].contains("Arsenal"));
    assert!(lines[1].trim_end().ends_with("WD"));
    assert!(lines[1].contains("+2"));
    assert!(lines[4].contains("Chelsea"));
    assert!(lines[4].contains("-2"));

    let short = render_table(&rows, 1);
    assert!(short.lines().nth(1).unwrap().trim_end().ends_with(" D"));
}

#[test]
fn renders_json_rows() {
    let rows = small_season_rows();
    let table_rows = standing_rows(&rows);
    assert_eq!(table_rows[0].position, 1);
    assert_eq!(table_rows[3].goal_difference, -2);
    assert_eq!(table_rows[3].form, "LD");

    let json = standings_json(&rows).expect("standings should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["code"], "ARS");
    assert_eq!(value[0]["points"], 4);
    assert_eq!(value[1]["name"], "Manchester City");
}

fn small_season_rows() -> Vec<league_table::standings::TeamStats> {
    build_table(&small_season()).sorted_standings()
}
