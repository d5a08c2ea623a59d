use crate::dataset::{Match, Season, TeamRef};
use crate::outcome::classify_outcome;
use crate::standings::{LeagueTable, TeamMatchRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub rounds: usize,
    pub matches: usize,
    pub records: usize,
}

/// Both sides of a match, team1 first.
pub fn match_records(m: &Match) -> [TeamMatchRecord; 2] {
    [
        side_record(&m.team1, m.score1, m.score2),
        side_record(&m.team2, m.score2, m.score1),
    ]
}

fn side_record(team: &TeamRef, scored: u32, conceded: u32) -> TeamMatchRecord {
    TeamMatchRecord {
        name: team.name.clone(),
        code: team.code.clone(),
        scored,
        conceded,
        result: classify_outcome(scored, conceded),
    }
}

/// Folds every match of `season` into `table`, in round then match order.
pub fn ingest_season(table: &mut LeagueTable, season: &Season) -> IngestSummary {
    let mut summary = IngestSummary::default();
    for round in &season.rounds {
        for m in &round.matches {
            for record in match_records(m) {
                table.record_team_match(record);
                summary.records += 1;
            }
            summary.matches += 1;
        }
        summary.rounds += 1;
        log::debug!("{}: {} matches folded", round.name, round.matches.len());
    }
    log::info!(
        "ingested {} rounds, {} matches, {} teams",
        summary.rounds,
        summary.matches,
        table.len()
    );
    summary
}

pub fn build_table(season: &Season) -> LeagueTable {
    let mut table = LeagueTable::new();
    ingest_season(&mut table, season);
    table
}
