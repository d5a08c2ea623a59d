use std::fmt::Write as _;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::outcome::Outcome;
use crate::standings::TeamStats;

const NAME_MIN_WIDTH: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub position: usize,
    pub code: String,
    pub name: String,
    pub played: usize,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub scored: u32,
    pub conceded: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub form: String,
}

pub fn standing_rows(rows: &[TeamStats]) -> Vec<StandingRow> {
    rows.iter()
        .enumerate()
        .map(|(idx, t)| StandingRow {
            position: idx + 1,
            code: t.code.clone(),
            name: t.name.clone(),
            played: t.played(),
            won: t.win_count,
            drawn: t.draw_count,
            lost: t.lose_count,
            scored: t.scored,
            conceded: t.conceded,
            goal_difference: t.goal_difference(),
            points: t.points,
            form: form_string(&t.form),
        })
        .collect()
}

pub fn standings_json(rows: &[TeamStats]) -> Result<String> {
    serde_json::to_string_pretty(&standing_rows(rows)).context("serialize standings")
}

pub fn render_table(rows: &[TeamStats], form_len: usize) -> String {
    let name_width = rows
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(NAME_MIN_WIDTH);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3}  {:>4} {:>4} {:>4}  {:>4}  Form",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts",
    );
    for (idx, t) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>3} {:>3} {:>3} {:>3}  {:>4} {:>4} {:>4}  {:>4}  {}",
            idx + 1,
            t.name,
            t.played(),
            t.win_count,
            t.draw_count,
            t.lose_count,
            t.scored,
            t.conceded,
            signed(t.goal_difference()),
            t.points,
            form_string(t.recent_form(form_len)),
        );
    }
    out
}

fn form_string(form: &[Outcome]) -> String {
    form.iter().map(|o| o.letter()).collect()
}

fn signed(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}
