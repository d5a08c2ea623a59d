use crate::standings::TeamStats;

pub const POINTS_WIN: u32 = 3;
pub const POINTS_DRAW: u32 = 1;
pub const POINTS_LOSS: u32 = 0;

/// Result of one match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn letter(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }
}

pub fn classify_outcome(scored_by_team: u32, scored_by_opponent: u32) -> Outcome {
    if scored_by_team > scored_by_opponent {
        Outcome::Win
    } else if scored_by_team == scored_by_opponent {
        Outcome::Draw
    } else {
        Outcome::Loss
    }
}

pub fn points_for(outcome: Outcome) -> u32 {
    match outcome {
        Outcome::Win => POINTS_WIN,
        Outcome::Draw => POINTS_DRAW,
        Outcome::Loss => POINTS_LOSS,
    }
}

pub fn goal_difference(stats: &TeamStats) -> i64 {
    i64::from(stats.scored) - i64::from(stats.conceded)
}

#[cfg(test)]
mod tests {
    use super::{Outcome, classify_outcome, points_for};

    #[test]
    fn classify_from_each_side() {
        assert_eq!(classify_outcome(3, 1), Outcome::Win);
        assert_eq!(classify_outcome(1, 3), Outcome::Loss);
        assert_eq!(classify_outcome(0, 0), Outcome::Draw);
    }

    #[test]
    fn points_per_match_never_exceed_three() {
        for (a, b) in [(0, 0), (2, 1), (1, 2), (4, 4), (0, 5)] {
            let total = points_for(classify_outcome(a, b)) + points_for(classify_outcome(b, a));
            assert!(total == 2 || total == 3, "{a}-{b} awarded {total}");
        }
    }
}
