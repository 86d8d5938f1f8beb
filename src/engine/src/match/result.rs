use crate::r#match::{PlayerId, PlayerSide};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TouchdownDetail {
    pub side: PlayerSide,
    pub player_id: PlayerId,
    pub period: u8,
    pub seconds_remaining: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub offense: u32,
    pub defense: u32,
    pub details: Vec<TouchdownDetail>,
}

impl Score {
    pub fn new() -> Self {
        Score::default()
    }

    pub fn get(&self, side: PlayerSide) -> u32 {
        match side {
            PlayerSide::Offense => self.offense,
            PlayerSide::Defense => self.defense,
        }
    }

    pub fn add_touchdown(&mut self, detail: TouchdownDetail, points: u32) {
        match detail.side {
            PlayerSide::Offense => self.offense = self.offense.saturating_add(points),
            PlayerSide::Defense => self.defense = self.defense.saturating_add(points),
        }

        self.details.push(detail);
    }

    pub fn leader(&self) -> Option<PlayerSide> {
        match self.offense.cmp(&self.defense) {
            std::cmp::Ordering::Greater => Some(PlayerSide::Offense),
            std::cmp::Ordering::Less => Some(PlayerSide::Defense),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// What is left of a match once it has ended.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub score: Score,
    pub winner: Option<PlayerSide>,
    pub ticks_played: u64,
}

impl MatchResult {
    pub fn new(score: Score, ticks_played: u64) -> Self {
        MatchResult {
            winner: score.leader(),
            score,
            ticks_played,
        }
    }
}
