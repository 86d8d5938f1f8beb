use crate::r#match::field::{PLAY_AREA_MAX, PLAY_AREA_MIN};
use crate::r#match::{FieldOrientation, MatchPlayer, PlayerSide};

/// Goal lines of both end zones along the attacking axis.
///
/// Movement is clamped to the play area, so touching the goal line counts as
/// reaching the end zone.
#[derive(Debug, Clone, Copy)]
pub struct EndZones {
    pub orientation: FieldOrientation,
    pub offense_goal_line: f32,
    pub defense_goal_line: f32,
}

impl From<FieldOrientation> for EndZones {
    fn from(orientation: FieldOrientation) -> Self {
        EndZones {
            orientation,
            offense_goal_line: PLAY_AREA_MIN,
            defense_goal_line: PLAY_AREA_MAX,
        }
    }
}

impl EndZones {
    /// Side that scores if `carrier` holds the ball where it stands.
    pub fn is_touchdown(&self, carrier: &MatchPlayer) -> Option<PlayerSide> {
        let coord = self.orientation.attacking_coord(&carrier.position);

        match carrier.side {
            PlayerSide::Offense if coord <= self.offense_goal_line => Some(PlayerSide::Offense),
            PlayerSide::Defense if coord >= self.defense_goal_line => Some(PlayerSide::Defense),
            _ => None,
        }
    }
}
