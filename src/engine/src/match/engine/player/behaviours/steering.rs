use crate::r#match::random::RandomSource;
use crate::r#match::settings::MatchSettings;
use crate::r#match::{FieldOrientation, MatchPlayer, PlayerSide};
use nalgebra::Vector2;

/// Role a player follows for one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum SteeringBehavior {
    Wander {
        jitter: Vector2<f32>,
    },
    Carry {
        target: Vector2<f32>,
    },
    Support {
        target: Vector2<f32>,
    },
    Pursuit {
        target: Vector2<f32>,
    },
}

impl SteeringBehavior {
    /// Picks the role for `player` given the ball holder at the start of the tick.
    ///
    /// Humans always wander (the user moves them forward by passing and
    /// clicking). Robots carry, support or chase depending on who holds the
    /// ball, and wander when nobody does.
    pub fn select(
        player: &MatchPlayer,
        owner: Option<&MatchPlayer>,
        orientation: FieldOrientation,
        settings: &MatchSettings,
        random: &mut dyn RandomSource,
    ) -> Self {
        match (player.side, owner) {
            (PlayerSide::Defense, Some(owner)) if owner.id == player.id => SteeringBehavior::Carry {
                target: orientation.defense_target(&player.position),
            },
            (PlayerSide::Defense, Some(owner)) if owner.side == PlayerSide::Defense => {
                SteeringBehavior::Support {
                    target: orientation.defense_target(&player.position),
                }
            }
            (PlayerSide::Defense, Some(owner)) => SteeringBehavior::Pursuit {
                target: owner.position,
            },
            _ => {
                let half = settings.wander_jitter / 2.0;
                let jx = random.range(-half, half);
                let jy = random.range(-half, half);

                SteeringBehavior::Wander {
                    jitter: Vector2::new(jx, jy),
                }
            }
        }
    }

    /// Velocity before separation and the axis cap.
    pub fn calculate(&self, player: &MatchPlayer, settings: &MatchSettings) -> Vector2<f32> {
        match self {
            SteeringBehavior::Wander { jitter } => player.velocity + jitter,
            SteeringBehavior::Carry { target } => {
                Self::seek(&player.position, target) * settings.carry_speed
            }
            SteeringBehavior::Support { target } => {
                Self::seek(&player.position, target) * settings.support_speed
            }
            SteeringBehavior::Pursuit { target } => {
                Self::seek(&player.position, target) * settings.carry_speed
            }
        }
    }

    /// Unit vector toward `target`, zero when already there.
    fn seek(position: &Vector2<f32>, target: &Vector2<f32>) -> Vector2<f32> {
        let to_target = target - position;
        let distance = to_target.norm();

        if distance > 0.0 && distance.is_finite() {
            to_target / distance
        } else {
            Vector2::zeros()
        }
    }
}

/// Push away from same-team players inside the separation radius, linearly
/// stronger the closer they are.
pub fn separation(
    player: &MatchPlayer,
    players: &[MatchPlayer],
    settings: &MatchSettings,
) -> Vector2<f32> {
    let radius = settings.separation_radius;

    players
        .iter()
        .filter(|other| other.id != player.id && other.is_teammate(player))
        .fold(Vector2::zeros(), |acc, other| {
            let away = player.position - other.position;
            let distance = away.norm();

            if distance > 0.0 && distance < radius {
                let force = settings.separation_strength * (radius - distance) / radius;
                acc + (away / distance) * force
            } else {
                acc
            }
        })
}

/// Caps each axis independently.
#[inline]
pub fn limit_axes(velocity: Vector2<f32>, max: f32) -> Vector2<f32> {
    Vector2::new(velocity.x.clamp(-max, max), velocity.y.clamp(-max, max))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringOutput {
    pub velocity: Vector2<f32>,
    pub drift: Vector2<f32>,
}

/// Computes every player's next velocity from one snapshot of the field, so
/// no player reacts to a teammate that already moved this tick.
pub fn steer_players(
    players: &[MatchPlayer],
    owner: Option<&MatchPlayer>,
    orientation: FieldOrientation,
    settings: &MatchSettings,
    random: &mut dyn RandomSource,
) -> Vec<SteeringOutput> {
    let offense_drift = orientation.offense_direction() * settings.drift_speed;

    players
        .iter()
        .map(|player| {
            let behavior = SteeringBehavior::select(player, owner, orientation, settings, random);

            let velocity =
                behavior.calculate(player, settings) + separation(player, players, settings);
            let velocity = limit_axes(velocity, settings.idle_max_speed);

            let drift = match player.side {
                PlayerSide::Offense => offense_drift,
                PlayerSide::Defense => Vector2::zeros(),
            };

            SteeringOutput { velocity, drift }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::random::SequenceRandom;
    use crate::r#match::PlayerId;

    fn robot(number: u8, x: f32, y: f32) -> MatchPlayer {
        let id = PlayerId::new(PlayerSide::Defense, number);
        MatchPlayer::new(id, Vector2::new(x, y), Vector2::zeros())
    }

    fn human(number: u8, x: f32, y: f32) -> MatchPlayer {
        let id = PlayerId::new(PlayerSide::Offense, number);
        MatchPlayer::new(id, Vector2::new(x, y), Vector2::zeros())
    }

    #[test]
    fn test_robot_carrier_heads_for_goal() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::constant(0.5);
        let carrier = robot(1, 50.0, 40.0);

        let behavior = SteeringBehavior::select(
            &carrier,
            Some(&carrier),
            FieldOrientation::Landscape,
            &settings,
            &mut random,
        );

        assert_eq!(behavior, SteeringBehavior::Carry { target: Vector2::new(95.0, 40.0) });

        let velocity = behavior.calculate(&carrier, &settings);
        assert!((velocity.x - settings.carry_speed).abs() < 1e-6);
        assert_eq!(velocity.y, 0.0);
    }

    #[test]
    fn test_robot_supports_teammate_slower() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::constant(0.5);
        let carrier = robot(1, 50.0, 40.0);
        let teammate = robot(2, 30.0, 60.0);

        let behavior = SteeringBehavior::select(
            &teammate,
            Some(&carrier),
            FieldOrientation::Portrait,
            &settings,
            &mut random,
        );

        assert_eq!(behavior, SteeringBehavior::Support { target: Vector2::new(30.0, 95.0) });

        let velocity = behavior.calculate(&teammate, &settings);
        assert_eq!(velocity.x, 0.0);
        assert!((velocity.y - settings.support_speed).abs() < 1e-6);
    }

    #[test]
    fn test_robot_chases_human_carrier() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::constant(0.5);
        let carrier = human(1, 50.0, 50.0);
        let chaser = robot(1, 47.0, 46.0);

        let behavior = SteeringBehavior::select(
            &chaser,
            Some(&carrier),
            FieldOrientation::Landscape,
            &settings,
            &mut random,
        );
        let velocity = behavior.calculate(&chaser, &settings);

        assert!((velocity.norm() - settings.carry_speed).abs() < 1e-5);
        assert!((velocity.x - 0.6 * settings.carry_speed).abs() < 1e-5);
        assert!((velocity.y - 0.8 * settings.carry_speed).abs() < 1e-5);
    }

    #[test]
    fn test_zero_length_seek_is_zero() {
        let settings = MatchSettings::default();
        let carrier = human(1, 50.0, 50.0);
        let chaser = robot(1, 50.0, 50.0);

        let behavior = SteeringBehavior::Pursuit { target: carrier.position };

        assert_eq!(behavior.calculate(&chaser, &settings), Vector2::zeros());
    }

    #[test]
    fn test_humans_wander_even_with_ball() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::new(vec![1.0, 0.0]);
        let mut carrier = human(1, 50.0, 50.0);
        carrier.velocity = Vector2::new(0.1, 0.1);

        let behavior = SteeringBehavior::select(
            &carrier,
            Some(&carrier.clone()),
            FieldOrientation::Landscape,
            &settings,
            &mut random,
        );

        let velocity = behavior.calculate(&carrier, &settings);
        assert!((velocity.x - 0.14).abs() < 1e-4);
        assert!((velocity.y - 0.06).abs() < 1e-4);
    }

    #[test]
    fn test_separation_pushes_teammates_apart_only() {
        let settings = MatchSettings::default();
        let players = vec![
            robot(1, 50.0, 50.0),
            robot(2, 53.0, 50.0),
            human(1, 49.0, 50.0),
        ];

        let push = separation(&players[0], &players, &settings);

        // half strength at half the radius, pointing away from R2, H1 ignored
        assert!((push.x + settings.separation_strength / 2.0).abs() < 1e-6);
        assert_eq!(push.y, 0.0);
    }

    #[test]
    fn test_separation_ignores_stacked_and_far_players() {
        let settings = MatchSettings::default();
        let players = vec![robot(1, 50.0, 50.0), robot(2, 50.0, 50.0), robot(3, 70.0, 50.0)];

        assert_eq!(separation(&players[0], &players, &settings), Vector2::zeros());
    }

    #[test]
    fn test_limit_axes_caps_independently() {
        let limited = limit_axes(Vector2::new(0.9, -0.1), 0.35);

        assert_eq!(limited, Vector2::new(0.35, -0.1));
    }

    #[test]
    fn test_steer_players_drift_only_for_humans() {
        let settings = MatchSettings::default();
        let mut random = SequenceRandom::constant(0.5);
        let players = vec![human(1, 80.0, 50.0), robot(1, 20.0, 50.0)];

        let orientation = FieldOrientation::Portrait;
        let outputs = steer_players(&players, None, orientation, &settings, &mut random);

        assert_eq!(outputs[0].drift, Vector2::new(0.0, -settings.drift_speed));
        assert_eq!(outputs[1].drift, Vector2::zeros());
        assert!(outputs.iter().all(|o| o.velocity.x.abs() <= settings.idle_max_speed));
    }
}
