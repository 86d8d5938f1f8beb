use crate::r#match::ball::{Ball, BallEvent};
use crate::r#match::random::RandomSource;
use crate::r#match::settings::MatchSettings;
use crate::r#match::tactics::Formation;
use crate::r#match::{MatchPlayer, PlayerId, PlayerSide, SteeringOutput, HUMAN_ROSTER};
use itertools::Itertools;
use nalgebra::Vector2;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The playable rectangle excludes the two 10%-wide end zones.
pub const PLAY_AREA_MIN: f32 = 10.0;
pub const PLAY_AREA_MAX: f32 = 90.0;

/// Robots aim past the goal line so they never stall on it.
pub const DEFENSE_CARRY_TARGET: f32 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrientation {
    #[default]
    Landscape,
    Portrait,
}

impl FieldOrientation {
    /// Coordinate along the axis the teams play on.
    #[inline]
    pub fn attacking_coord(&self, position: &Vector2<f32>) -> f32 {
        match self {
            FieldOrientation::Landscape => position.x,
            FieldOrientation::Portrait => position.y,
        }
    }

    /// Unit direction the offense attacks in: lower x, or lower y when portrait.
    pub fn offense_direction(&self) -> Vector2<f32> {
        match self {
            FieldOrientation::Landscape => Vector2::new(-1.0, 0.0),
            FieldOrientation::Portrait => Vector2::new(0.0, -1.0),
        }
    }

    /// Point a robot heads for, keeping its cross-field coordinate.
    pub fn defense_target(&self, position: &Vector2<f32>) -> Vector2<f32> {
        match self {
            FieldOrientation::Landscape => Vector2::new(DEFENSE_CARRY_TARGET, position.y),
            FieldOrientation::Portrait => Vector2::new(position.x, DEFENSE_CARRY_TARGET),
        }
    }
}

impl Display for FieldOrientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldOrientation::Landscape => write!(f, "landscape"),
            FieldOrientation::Portrait => write!(f, "portrait"),
        }
    }
}

impl FromStr for FieldOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "landscape" => Ok(FieldOrientation::Landscape),
            "portrait" => Ok(FieldOrientation::Portrait),
            other => Err(format!("unknown field orientation: {}", other)),
        }
    }
}

#[inline]
pub fn clamp_to_play_area(value: f32) -> f32 {
    value.clamp(PLAY_AREA_MIN, PLAY_AREA_MAX)
}

/// Entity store: both rosters plus the ball that tracks their possession.
pub struct MatchField {
    pub orientation: FieldOrientation,
    pub players: Vec<MatchPlayer>,
    pub ball: Ball,
}

impl MatchField {
    pub fn new(orientation: FieldOrientation) -> Self {
        let players = Self::place_players(orientation, |_| Vector2::zeros());

        MatchField {
            orientation,
            players,
            ball: Ball::new(),
        }
    }

    /// Puts every player back on its formation anchor with a fresh random
    /// velocity, then hands the ball to a random player.
    pub fn reset_kickoff(
        &mut self,
        settings: &MatchSettings,
        random: &mut dyn RandomSource,
    ) -> Option<BallEvent> {
        self.players = Self::place_players(self.orientation, |_| {
            Self::kickoff_velocity(settings, random)
        });

        self.ball.assign_random_owner(&self.players, random)
    }

    /// Re-places both teams on the formation of `orientation`. Possession is kept.
    pub fn relayout(
        &mut self,
        orientation: FieldOrientation,
        settings: &MatchSettings,
        random: &mut dyn RandomSource,
    ) {
        self.orientation = orientation;
        self.players = Self::place_players(orientation, |_| {
            Self::kickoff_velocity(settings, random)
        });
    }

    fn kickoff_velocity(settings: &MatchSettings, random: &mut dyn RandomSource) -> Vector2<f32> {
        let spread = settings.kickoff_velocity_spread;

        let vx = random.range(-spread, spread);
        let vy = random.range(-spread, spread);

        Vector2::new(vx, vy)
    }

    fn place_players(
        orientation: FieldOrientation,
        mut velocity: impl FnMut(PlayerId) -> Vector2<f32>,
    ) -> Vec<MatchPlayer> {
        let formation = Formation::for_orientation(orientation);

        let humans = formation
            .offense
            .iter()
            .zip_eq(HUMAN_ROSTER.iter())
            .enumerate()
            .map(|(idx, (anchor, identity))| {
                let id = PlayerId::new(PlayerSide::Offense, idx as u8 + 1);
                MatchPlayer::new(id, *anchor, velocity(id)).with_identity(*identity)
            })
            .collect_vec();

        let robots = formation
            .defense
            .iter()
            .enumerate()
            .map(|(idx, anchor)| {
                let id = PlayerId::new(PlayerSide::Defense, idx as u8 + 1);
                MatchPlayer::new(id, *anchor, velocity(id))
            })
            .collect_vec();

        [humans, robots].concat()
    }

    /// Applies steering output: integrates, then bounces and clamps to the play area.
    pub fn advance_tick(&mut self, steering: &[SteeringOutput]) {
        for (player, output) in self.players.iter_mut().zip(steering) {
            player.velocity = output.velocity;
            player.move_to(output.drift);
            player.check_boundary_collision();
        }
    }

    /// Click-to-move. No collision check against other players.
    pub fn move_player(&mut self, id: PlayerId, x: f32, y: f32) -> bool {
        match self.get_player_mut(id) {
            Some(player) => {
                player.position = Vector2::new(clamp_to_play_area(x), clamp_to_play_area(y));
                true
            }
            None => false,
        }
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&MatchPlayer> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_player_mut(&mut self, id: PlayerId) -> Option<&mut MatchPlayer> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn team(&self, side: PlayerSide) -> impl Iterator<Item = &MatchPlayer> {
        self.players.iter().filter(move |p| p.side == side)
    }

    pub fn owner(&self) -> Option<&MatchPlayer> {
        self.ball.owner_id().and_then(|id| self.get_player(id))
    }

    /// Ball is drawn just above its holder.
    pub fn ball_position(&self) -> Option<Vector2<f32>> {
        self.owner()
            .map(|owner| Vector2::new(owner.position.x, owner.position.y - 6.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::random::SequenceRandom;

    fn in_play_area(v: &Vector2<f32>) -> bool {
        let area = PLAY_AREA_MIN..=PLAY_AREA_MAX;
        area.contains(&v.x) && area.contains(&v.y)
    }

    #[test]
    fn test_new_field_places_both_teams() {
        let field = MatchField::new(FieldOrientation::Landscape);

        assert_eq!(field.team(PlayerSide::Offense).count(), 4);
        assert_eq!(field.team(PlayerSide::Defense).count(), 4);
        assert!(field.ball.owner_id().is_none());
        assert_eq!(field.players[0].id.to_string(), "H1");
        assert_eq!(field.players[4].id.to_string(), "R1");
    }

    #[test]
    fn test_reset_kickoff_uses_formation_and_assigns_owner() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::new(vec![0.0, 1.0, 0.5, 0.25]);
        let mut field = MatchField::new(FieldOrientation::Landscape);

        field.reset_kickoff(&settings, &mut random);

        let formation = Formation::for_orientation(FieldOrientation::Landscape);
        for (player, anchor) in field.team(PlayerSide::Offense).zip(formation.offense.iter()) {
            assert_eq!(player.position, *anchor);
            assert!(player.velocity.x.abs() <= settings.kickoff_velocity_spread);
            assert!(player.velocity.y.abs() <= settings.kickoff_velocity_spread);
        }

        assert!(field.owner().is_some());
    }

    #[test]
    fn test_reset_kickoff_twice_always_has_owner() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::new(vec![0.9, 0.1, 0.3]);
        let mut field = MatchField::new(FieldOrientation::Portrait);

        field.reset_kickoff(&settings, &mut random);
        field.reset_kickoff(&settings, &mut random);

        let formation = Formation::for_orientation(FieldOrientation::Portrait);
        for (player, anchor) in field.team(PlayerSide::Defense).zip(formation.defense.iter()) {
            assert_eq!(player.position, *anchor);
        }
        assert!(field.owner().is_some());
    }

    #[test]
    fn test_advance_tick_bounces_off_play_area() {
        let mut field = MatchField::new(FieldOrientation::Landscape);
        field.players[0].position = Vector2::new(10.1, 89.9);

        let idle = SteeringOutput {
            velocity: Vector2::zeros(),
            drift: Vector2::zeros(),
        };
        let mut steering = vec![idle; field.players.len()];
        steering[0].velocity = Vector2::new(-0.3, 0.3);

        field.advance_tick(&steering);

        let player = &field.players[0];
        assert_eq!(player.position, Vector2::new(PLAY_AREA_MIN, PLAY_AREA_MAX));
        assert_eq!(player.velocity, Vector2::new(0.3, -0.3));
        assert!(field.players.iter().all(|p| in_play_area(&p.position)));
    }

    #[test]
    fn test_move_player_clamps_and_ignores_unknown() {
        let mut field = MatchField::new(FieldOrientation::Landscape);
        let id = PlayerId::new(PlayerSide::Offense, 2);

        assert!(field.move_player(id, 3.0, 120.0));
        assert_eq!(
            field.get_player(id).map(|p| p.position),
            Some(Vector2::new(PLAY_AREA_MIN, PLAY_AREA_MAX))
        );

        assert!(!field.move_player(PlayerId::new(PlayerSide::Offense, 9), 50.0, 50.0));
    }

    #[test]
    fn test_relayout_keeps_owner() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::constant(0.7);
        let mut field = MatchField::new(FieldOrientation::Landscape);
        field.reset_kickoff(&settings, &mut random);
        let owner = field.ball.owner_id();

        field.relayout(FieldOrientation::Portrait, &settings, &mut random);

        assert_eq!(field.orientation, FieldOrientation::Portrait);
        assert_eq!(field.ball.owner_id(), owner);
        assert_eq!(field.players[0].position, Vector2::new(50.0, 82.0));
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!("Portrait".parse::<FieldOrientation>(), Ok(FieldOrientation::Portrait));
        assert!("diagonal".parse::<FieldOrientation>().is_err());
    }

    #[test]
    fn test_ball_position_above_owner() {
        let mut field = MatchField::new(FieldOrientation::Landscape);
        let id = PlayerId::new(PlayerSide::Defense, 1);
        field.ball.set_owner(Some(id));

        assert_eq!(field.ball_position(), Some(Vector2::new(22.0, 34.0)));
    }
}
