use chrono::{Duration as ChronoDuration, NaiveDate};
use rand::Rng;

use crate::dataset::{Match, Round, Season, TeamRef};

const TOWNS: [&str; 12] = [
    "Ashford", "Brampton", "Calder", "Dunmore", "Eastleigh", "Farrow", "Glenbrook", "Harwick",
    "Ilford", "Kelso", "Lanark", "Morden",
];

#[derive(Debug, Clone)]
pub struct FakeSeasonConfig {
    pub name: String,
    pub teams: usize,
    pub max_goals: u32,
    pub start_date: NaiveDate,
}

impl Default for FakeSeasonConfig {
    fn default() -> Self {
        Self {
            name: "Synthetic League".to_string(),
            teams: 20,
            max_goals: 5,
            start_date: NaiveDate::from_ymd_opt(2025, 8, 16).unwrap_or_default(),
        }
    }
}

pub fn fake_teams(n: usize) -> Vec<TeamRef> {
    (0..n)
        .map(|i| {
            let town = TOWNS[i % TOWNS.len()];
            let name = if i < TOWNS.len() {
                format!("{town} FC")
            } else {
                format!("{town} United {}", i / TOWNS.len() + 1)
            };
            TeamRef {
                key: Some(format!("club{:02}", i + 1)),
                name,
                code: format!("C{:02}", i + 1),
            }
        })
        .collect()
}

/// Double round-robin: every pair meets once per half, home and away swapped
/// in the second half. An odd team count gets a bye slot each round.
pub fn generate_season(cfg: &FakeSeasonConfig, rng: &mut impl Rng) -> Season {
    let teams = fake_teams(cfg.teams);
    if teams.len() < 2 {
        return Season {
            name: cfg.name.clone(),
            rounds: Vec::new(),
        };
    }

    let mut slots: Vec<Option<usize>> = (0..teams.len()).map(Some).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let half_rounds = n - 1;

    let mut pairings: Vec<Vec<(usize, usize)>> = Vec::with_capacity(half_rounds);
    for r in 0..half_rounds {
        let mut round = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) {
                // Alternate the fixed slot's venue so nobody is always at home.
                if i == 0 && r % 2 == 1 {
                    round.push((b, a));
                } else {
                    round.push((a, b));
                }
            }
        }
        pairings.push(round);
        // Circle method: slot 0 stays, the rest rotate one step.
        slots[1..].rotate_right(1);
    }

    let mut rounds = Vec::with_capacity(half_rounds * 2);
    for (leg, swap) in [(0usize, false), (1usize, true)] {
        for (r, pairs) in pairings.iter().enumerate() {
            let number = leg * half_rounds + r;
            let date = cfg
                .start_date
                .checked_add_signed(ChronoDuration::weeks(number as i64));
            let matches = pairs
                .iter()
                .map(|&(home, away)| {
                    let (home, away) = if swap { (away, home) } else { (home, away) };
                    Match {
                        date,
                        team1: teams[home].clone(),
                        team2: teams[away].clone(),
                        score1: rng.gen_range(0..=cfg.max_goals),
                        score2: rng.gen_range(0..=cfg.max_goals),
                    }
                })
                .collect();
            rounds.push(Round {
                name: format!("Matchday {}", number + 1),
                matches,
            });
        }
    }

    Season {
        name: cfg.name.clone(),
        rounds,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{FakeSeasonConfig, generate_season};

    #[test]
    fn every_pair_meets_home_and_away() {
        let cfg = FakeSeasonConfig {
            teams: 6,
            ..FakeSeasonConfig::default()
        };
        let season = generate_season(&cfg, &mut StdRng::seed_from_u64(7));
        assert_eq!(season.rounds.len(), 10);

        let mut fixtures = HashSet::new();
        for round in &season.rounds {
            assert_eq!(round.matches.len(), 3);
            for m in &round.matches {
                assert!(fixtures.insert((m.team1.code.clone(), m.team2.code.clone())));
            }
        }
        assert_eq!(fixtures.len(), 30);
    }

    #[test]
    fn odd_team_count_gets_byes() {
        let cfg = FakeSeasonConfig {
            teams: 5,
            ..FakeSeasonConfig::default()
        };
        let season = generate_season(&cfg, &mut StdRng::seed_from_u64(1));
        assert_eq!(season.rounds.len(), 10);
        assert!(season.rounds.iter().all(|r| r.matches.len() == 2));
        assert_eq!(season.match_count(), 20);
    }
}
