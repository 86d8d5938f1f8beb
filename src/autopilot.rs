use engine::{MatchEngine, MatchPhase, PlayerSide, RandomSource};
use log::debug;

const PASS_CHANCE: f32 = 0.02;
const MOVE_CHANCE: f32 = 0.05;
const MOVE_STEP: f32 = 6.0;
const BREAK_WAIT_MS: u64 = 3_000;

/// Stands in for the user in the headless binary: passes and click-moves
/// while the humans hold the ball, and restarts play after the break.
pub struct Autopilot {
    random: Box<dyn RandomSource>,
    is_one_shot_game: bool,
    break_waited_ms: u64,
}

impl Autopilot {
    pub fn new(random: Box<dyn RandomSource>, is_one_shot_game: bool) -> Self {
        Autopilot {
            random,
            is_one_shot_game,
            break_waited_ms: 0,
        }
    }

    /// Called once per frame with the virtual time elapsed since the last call.
    pub fn act(&mut self, engine: &mut MatchEngine, dt_ms: u64) {
        match engine.phase() {
            MatchPhase::PeriodBreak => self.wait_for_restart(engine, dt_ms),
            MatchPhase::Playing => self.play(engine),
            _ => {}
        }
    }

    fn wait_for_restart(&mut self, engine: &mut MatchEngine, dt_ms: u64) {
        self.break_waited_ms += dt_ms;

        if self.is_one_shot_game || self.break_waited_ms >= BREAK_WAIT_MS {
            self.break_waited_ms = 0;
            engine.resume_after_period_break();
        }
    }

    fn play(&mut self, engine: &mut MatchEngine) {
        let Some(owner) = engine.field.owner() else {
            return;
        };

        if owner.side != PlayerSide::Offense {
            return;
        }

        let owner_id = owner.id;

        if self.random.next_f32() < PASS_CHANCE {
            let targets: Vec<_> = engine
                .field
                .team(PlayerSide::Offense)
                .map(|p| p.id)
                .filter(|id| *id != owner_id)
                .collect();

            if !targets.is_empty() {
                let target = targets[self.random.index(targets.len())];

                debug!("autopilot: pass {} -> {}", owner_id, target);
                engine.request_pass(target);
                return;
            }
        }

        if self.random.next_f32() < MOVE_CHANCE {
            let selected = engine.selected_id().and_then(|id| engine.field.get_player(id));
            let Some(selected) = selected else {
                return;
            };

            let target = selected.position + engine.orientation().offense_direction() * MOVE_STEP;

            debug!("autopilot: move {} to ({:.1}, {:.1})", selected.id, target.x, target.y);
            engine.move_selected(target.x, target.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{FieldOrientation, MatchSettings, PlayerId, SequenceRandom};

    const H1: PlayerId = PlayerId::new(PlayerSide::Offense, 1);

    fn started_with_h1() -> MatchEngine {
        let mut engine = MatchEngine::with_random(
            MatchSettings::default(),
            FieldOrientation::Landscape,
            Box::new(SequenceRandom::constant(0.0)),
        );
        engine.start_match();
        engine
    }

    #[test]
    fn test_autopilot_passes_when_humans_hold_ball() {
        let mut engine = started_with_h1();
        let mut autopilot = Autopilot::new(Box::new(SequenceRandom::new(vec![0.0, 0.99])), false);

        autopilot.act(&mut engine, 40);

        let owner = engine.owner_id();
        assert!(owner.is_some());
        assert_ne!(owner, Some(H1));
        assert_eq!(owner.map(|id| id.side), Some(PlayerSide::Offense));
    }

    #[test]
    fn test_autopilot_moves_selected_forward() {
        let mut engine = started_with_h1();
        let mut autopilot = Autopilot::new(Box::new(SequenceRandom::new(vec![0.5, 0.0])), false);

        autopilot.act(&mut engine, 40);

        assert_eq!(engine.owner_id(), Some(H1));
        assert_eq!(engine.field.get_player(H1).map(|p| p.position.x), Some(76.0));
    }

    #[test]
    fn test_autopilot_resumes_after_break() {
        let mut engine = started_with_h1();
        engine.context.state.set(MatchPhase::PeriodBreak);
        let mut autopilot = Autopilot::new(Box::new(SequenceRandom::constant(0.5)), false);

        autopilot.act(&mut engine, 2_000);
        assert_eq!(engine.phase(), MatchPhase::PeriodBreak);

        autopilot.act(&mut engine, 1_000);
        assert_eq!(engine.phase(), MatchPhase::Playing);
        assert_eq!(engine.state().period, 2);
    }

    #[test]
    fn test_one_shot_resumes_immediately() {
        let mut engine = started_with_h1();
        engine.context.state.set(MatchPhase::PeriodBreak);
        let mut autopilot = Autopilot::new(Box::new(SequenceRandom::constant(0.5)), true);

        autopilot.act(&mut engine, 0);

        assert_eq!(engine.phase(), MatchPhase::Playing);
    }
}
