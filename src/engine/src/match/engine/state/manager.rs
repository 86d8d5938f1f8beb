use crate::r#match::settings::MatchSettings;
use crate::r#match::{GameState, MatchPhase};

/// What happens when a period's countdown runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodTransition {
    /// Only after the first period; waits for the user to resume.
    Break,
    /// Straight into the given period with a fresh kickoff.
    NextPeriod(u8),
    GameOver,
}

pub struct StateManager;

impl StateManager {
    pub fn get_next_transition(state: &GameState, total_periods: u8) -> Option<PeriodTransition> {
        if !state.is_period_over() {
            return None;
        }

        let transition = match state.period {
            1 if total_periods > 1 => PeriodTransition::Break,
            period if period < total_periods => PeriodTransition::NextPeriod(period + 1),
            _ => PeriodTransition::GameOver,
        };

        Some(transition)
    }

    /// Applies `transition` to the clock. Kickoffs are left to the caller.
    pub fn handle_period_finish(
        state: &mut GameState,
        transition: PeriodTransition,
        settings: &MatchSettings,
    ) {
        match transition {
            PeriodTransition::Break => {
                state.set(MatchPhase::PeriodBreak);
            }
            PeriodTransition::NextPeriod(period) => {
                state.period = period;
                state.seconds_remaining = settings.period_seconds;
            }
            PeriodTransition::GameOver => {
                state.set(MatchPhase::Ended);
            }
        }
    }

    pub fn start(state: &mut GameState, settings: &MatchSettings) -> bool {
        if !matches!(state.phase, MatchPhase::Idle | MatchPhase::Ended) {
            return false;
        }

        state.period = 1;
        state.seconds_remaining = settings.period_seconds;
        state.set(MatchPhase::Playing);

        true
    }

    pub fn resume_after_break(state: &mut GameState, settings: &MatchSettings) -> bool {
        if state.phase != MatchPhase::PeriodBreak {
            return false;
        }

        state.period = state.period.saturating_add(1);
        state.seconds_remaining = settings.period_seconds;
        state.set(MatchPhase::Playing);

        true
    }
}
