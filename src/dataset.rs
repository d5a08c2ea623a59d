use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub key: Option<String>,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub date: Option<NaiveDate>,
    pub team1: TeamRef,
    pub team2: TeamRef,
    pub score1: u32,
    pub score2: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Season {
    pub name: String,
    pub rounds: Vec<Round>,
}

impl Season {
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(|r| r.matches.len()).sum()
    }
}

// On-disk shape, openfootball style. Scores stay signed and optional here so
// bad input reaches validation instead of failing inside serde.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawSeason {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rounds: Vec<RawRound>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRound {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub matches: Vec<RawMatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub team1: RawTeam,
    pub team2: RawTeam,
    #[serde(default)]
    pub score1: Option<i64>,
    #[serde(default)]
    pub score2: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

/// Rejected input. `round` is the round name, `position` the 1-based match
/// index inside that round.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum DatasetError {
    #[error("{round} match {position}: score missing")]
    MissingScore { round: String, position: usize },

    #[error("{round} match {position}: negative score {score}")]
    NegativeScore {
        round: String,
        position: usize,
        score: i64,
    },

    #[error("{round} match {position}: score {score} out of range")]
    ScoreOutOfRange {
        round: String,
        position: usize,
        score: i64,
    },

    #[error("{round} match {position}: team code is empty")]
    EmptyCode { round: String, position: usize },

    #[error("{round} match {position}: team {code} cannot play itself")]
    SelfMatch {
        round: String,
        position: usize,
        code: String,
    },

    #[error("{round} match {position}: invalid date {date:?}")]
    InvalidDate {
        round: String,
        position: usize,
        date: String,
    },

    #[error("team code {code} used for both {first:?} and {second:?}")]
    NameMismatch {
        code: String,
        first: String,
        second: String,
    },
}

pub fn load_season(path: &Path) -> Result<Season> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read season file {}", path.display()))?;
    parse_season_json(&raw).with_context(|| format!("parse season file {}", path.display()))
}

pub fn parse_season_json(raw: &str) -> Result<Season> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Season::default());
    }
    let parsed: RawSeason = serde_json::from_str(trimmed).context("invalid season json")?;
    let season = validate_season(&parsed)?;
    log::debug!(
        "parsed season {:?}: {} rounds, {} matches",
        season.name,
        season.rounds.len(),
        season.match_count()
    );
    Ok(season)
}

pub fn validate_season(raw: &RawSeason) -> Result<Season, DatasetError> {
    let mut names: HashMap<&str, &str> = HashMap::new();
    let mut rounds = Vec::with_capacity(raw.rounds.len());

    for round in &raw.rounds {
        let mut matches = Vec::with_capacity(round.matches.len());
        for (idx, m) in round.matches.iter().enumerate() {
            let position = idx + 1;
            let team1 = validate_team(&m.team1, &round.name, position, &mut names)?;
            let team2 = validate_team(&m.team2, &round.name, position, &mut names)?;
            if team1.code == team2.code {
                return Err(DatasetError::SelfMatch {
                    round: round.name.clone(),
                    position,
                    code: team1.code,
                });
            }
            let date = match m.date.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(s) => Some(NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
                    DatasetError::InvalidDate {
                        round: round.name.clone(),
                        position,
                        date: s.to_string(),
                    }
                })?),
            };
            matches.push(Match {
                date,
                team1,
                team2,
                score1: validate_score(m.score1, &round.name, position)?,
                score2: validate_score(m.score2, &round.name, position)?,
            });
        }
        rounds.push(Round {
            name: round.name.clone(),
            matches,
        });
    }

    Ok(Season {
        name: raw.name.clone(),
        rounds,
    })
}

fn validate_team<'a>(
    team: &'a RawTeam,
    round: &str,
    position: usize,
    names: &mut HashMap<&'a str, &'a str>,
) -> Result<TeamRef, DatasetError> {
    let code = team.code.trim();
    if code.is_empty() {
        return Err(DatasetError::EmptyCode {
            round: round.to_string(),
            position,
        });
    }
    let name = team.name.trim();
    match names.get(code) {
        Some(first) if *first != name => {
            return Err(DatasetError::NameMismatch {
                code: code.to_string(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        Some(_) => {}
        None => {
            names.insert(code, name);
        }
    }
    Ok(TeamRef {
        key: team.key.clone(),
        name: name.to_string(),
        code: code.to_string(),
    })
}

fn validate_score(score: Option<i64>, round: &str, position: usize) -> Result<u32, DatasetError> {
    let Some(score) = score else {
        return Err(DatasetError::MissingScore {
            round: round.to_string(),
            position,
        });
    };
    if score < 0 {
        return Err(DatasetError::NegativeScore {
            round: round.to_string(),
            position,
            score,
        });
    }
    u8::try_from(score)
        .map(u32::from)
        .map_err(|_| DatasetError::ScoreOutOfRange {
            round: round.to_string(),
            position,
            score,
        })
}

/// Serializes a season back into the on-disk shape.
pub fn season_to_json(season: &Season) -> Result<String> {
    let raw = RawSeason {
        name: season.name.clone(),
        rounds: season
            .rounds
            .iter()
            .map(|round| RawRound {
                name: round.name.clone(),
                matches: round.matches.iter().map(raw_match).collect(),
            })
            .collect(),
    };
    serde_json::to_string_pretty(&raw).context("serialize season")
}

fn raw_match(m: &Match) -> RawMatch {
    RawMatch {
        date: m.date.map(|d| d.format(DATE_FORMAT).to_string()),
        team1: raw_team(&m.team1),
        team2: raw_team(&m.team2),
        score1: Some(i64::from(m.score1)),
        score2: Some(i64::from(m.score2)),
    }
}

fn raw_team(team: &TeamRef) -> RawTeam {
    RawTeam {
        key: team.key.clone(),
        name: team.name.clone(),
        code: team.code.clone(),
    }
}
