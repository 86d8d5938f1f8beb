use crate::r#match::{
    FieldOrientation, GameState, MatchEngine, MatchPlayer, PlayerId, PlayerIdentity, PlayerSide,
};
use nalgebra::Vector2;
use serde::Serialize;

/// Read-only copy of one player for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub side: PlayerSide,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub identity: Option<PlayerIdentity>,
    pub has_ball: bool,
    pub selected: bool,
}

impl PlayerSnapshot {
    fn new(player: &MatchPlayer, owner: Option<PlayerId>, selected: Option<PlayerId>) -> Self {
        PlayerSnapshot {
            id: player.id,
            side: player.side,
            position: player.position,
            velocity: player.velocity,
            identity: player.identity,
            has_ball: owner == Some(player.id),
            selected: selected == Some(player.id),
        }
    }
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct MatchSnapshot {
    pub orientation: FieldOrientation,
    pub players: Vec<PlayerSnapshot>,
    pub owner: Option<PlayerId>,
    pub selected: Option<PlayerId>,
    pub ball_position: Option<Vector2<f32>>,
    pub offense_score: u32,
    pub defense_score: u32,
    pub clock: GameState,
}

impl From<&MatchEngine> for MatchSnapshot {
    fn from(engine: &MatchEngine) -> Self {
        let owner = engine.owner_id();
        let selected = engine.selected_id();

        MatchSnapshot {
            orientation: engine.orientation(),
            players: engine
                .players()
                .iter()
                .map(|player| PlayerSnapshot::new(player, owner, selected))
                .collect(),
            owner,
            selected,
            ball_position: engine.field.ball_position(),
            offense_score: engine.score().offense,
            defense_score: engine.score().defense,
            clock: *engine.state(),
        }
    }
}

impl MatchSnapshot {
    pub fn player(&self, id: PlayerId) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id == id)
    }
}
