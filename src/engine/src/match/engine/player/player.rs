use crate::r#match::field::{PLAY_AREA_MAX, PLAY_AREA_MIN};
use nalgebra::Vector2;
use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSide {
    /// Humans, steered by the user.
    Offense,
    /// Robots, steered by the engine.
    Defense,
}

impl PlayerSide {
    pub fn opposite(&self) -> PlayerSide {
        match self {
            PlayerSide::Offense => PlayerSide::Defense,
            PlayerSide::Defense => PlayerSide::Offense,
        }
    }

    pub fn team_name(&self) -> &'static str {
        match self {
            PlayerSide::Offense => "Humans",
            PlayerSide::Defense => "Robots",
        }
    }

    fn id_prefix(&self) -> char {
        match self {
            PlayerSide::Offense => 'H',
            PlayerSide::Defense => 'R',
        }
    }
}

/// Stable player id, rendered as `H1`..`H4` for humans and `R1`..`R4` for robots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId {
    pub side: PlayerSide,
    pub number: u8,
}

impl PlayerId {
    pub const fn new(side: PlayerSide, number: u8) -> Self {
        PlayerId { side, number }
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.side.id_prefix(), self.number)
    }
}

impl FromStr for PlayerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();

        let side = match chars.next() {
            Some('H') | Some('h') => PlayerSide::Offense,
            Some('R') | Some('r') => PlayerSide::Defense,
            _ => return Err(format!("invalid player id: {}", s)),
        };

        chars
            .as_str()
            .parse::<u8>()
            .map(|number| PlayerId::new(side, number))
            .map_err(|_| format!("invalid player id: {}", s))
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Display-only data for a human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerIdentity {
    pub name: &'static str,
    pub jersey: u8,
}

pub const HUMAN_ROSTER: [PlayerIdentity; 4] = [
    PlayerIdentity { name: "Tommy", jersey: 12 },
    PlayerIdentity { name: "Glenn", jersey: 21 },
    PlayerIdentity { name: "Ruslan", jersey: 42 },
    PlayerIdentity { name: "Tyler", jersey: 7 },
];

#[derive(Debug, Clone)]
pub struct MatchPlayer {
    pub id: PlayerId,
    pub side: PlayerSide,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub identity: Option<PlayerIdentity>,
}

impl MatchPlayer {
    pub fn new(id: PlayerId, position: Vector2<f32>, velocity: Vector2<f32>) -> Self {
        MatchPlayer {
            id,
            side: id.side,
            position,
            velocity,
            identity: None,
        }
    }

    pub fn with_identity(mut self, identity: PlayerIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn move_to(&mut self, drift: Vector2<f32>) {
        if !self.velocity.x.is_nan() {
            self.position.x += self.velocity.x + drift.x;
        }

        if !self.velocity.y.is_nan() {
            self.position.y += self.velocity.y + drift.y;
        }
    }

    /// Reflects velocity on any axis that left the play area, then clamps.
    pub fn check_boundary_collision(&mut self) {
        if self.position.x < PLAY_AREA_MIN || self.position.x > PLAY_AREA_MAX {
            self.velocity.x = -self.velocity.x;
        }

        if self.position.y < PLAY_AREA_MIN || self.position.y > PLAY_AREA_MAX {
            self.velocity.y = -self.velocity.y;
        }

        self.position.x = self.position.x.clamp(PLAY_AREA_MIN, PLAY_AREA_MAX);
        self.position.y = self.position.y.clamp(PLAY_AREA_MIN, PLAY_AREA_MAX);
    }

    #[inline]
    pub fn distance_to(&self, position: &Vector2<f32>) -> f32 {
        (self.position - position).norm()
    }

    pub fn is_teammate(&self, other: &MatchPlayer) -> bool {
        self.side == other.side
    }
}
