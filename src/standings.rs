use std::cmp::Ordering;
use std::collections::HashMap;

use crate::outcome::{Outcome, goal_difference, points_for};

/// One side of a finished match, ready to be folded into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMatchRecord {
    pub name: String,
    pub code: String,
    pub scored: u32,
    pub conceded: u32,
    pub result: Outcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub code: String,
    pub name: String,
    pub scored: u32,
    pub conceded: u32,
    pub points: u32,
    pub win_count: u32,
    pub draw_count: u32,
    pub lose_count: u32,
    /// Outcomes in the order they were recorded.
    pub form: Vec<Outcome>,
}

impl TeamStats {
    fn from_record(record: TeamMatchRecord) -> Self {
        let mut stats = Self {
            code: record.code,
            name: record.name,
            scored: 0,
            conceded: 0,
            points: 0,
            win_count: 0,
            draw_count: 0,
            lose_count: 0,
            form: Vec::new(),
        };
        stats.absorb(record.scored, record.conceded, record.result);
        stats
    }

    fn absorb(&mut self, scored: u32, conceded: u32, result: Outcome) {
        self.scored = self.scored.saturating_add(scored);
        self.conceded = self.conceded.saturating_add(conceded);
        self.points = self.points.saturating_add(points_for(result));
        let counter = match result {
            Outcome::Win => &mut self.win_count,
            Outcome::Draw => &mut self.draw_count,
            Outcome::Loss => &mut self.lose_count,
        };
        *counter = counter.saturating_add(1);
        self.form.push(result);
    }

    pub fn played(&self) -> usize {
        self.form.len()
    }

    pub fn goal_difference(&self) -> i64 {
        goal_difference(self)
    }

    /// Last `n` outcomes, oldest first.
    pub fn recent_form(&self, n: usize) -> &[Outcome] {
        let start = self.form.len().saturating_sub(n);
        &self.form[start..]
    }
}

/// Ranking rule: points, then goal difference, then goals scored, all descending.
/// Full ties compare equal; callers rely on a stable sort to keep first-seen order.
pub fn compare_standing(a: &TeamStats, b: &TeamStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| goal_difference(b).cmp(&goal_difference(a)))
        .then_with(|| b.scored.cmp(&a.scored))
}

/// Accumulated stats for one table-building pass, keyed by team code.
#[derive(Debug, Clone, Default)]
pub struct LeagueTable {
    teams: Vec<TeamStats>,
    index: HashMap<String, usize>,
}

impl LeagueTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one side of one match. Calling this twice for the same match
    /// counts it twice.
    pub fn record_team_match(&mut self, record: TeamMatchRecord) {
        if let Some(&idx) = self.index.get(&record.code) {
            self.teams[idx].absorb(record.scored, record.conceded, record.result);
            return;
        }
        self.index.insert(record.code.clone(), self.teams.len());
        self.teams.push(TeamStats::from_record(record));
    }

    pub fn sorted_standings(&self) -> Vec<TeamStats> {
        let mut rows = self.teams.clone();
        rows.sort_by(compare_standing);
        rows
    }

    pub fn get(&self, code: &str) -> Option<&TeamStats> {
        self.index.get(code).map(|&idx| &self.teams[idx])
    }

    /// Teams in first-seen order.
    pub fn teams(&self) -> impl Iterator<Item = &TeamStats> {
        self.teams.iter()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
