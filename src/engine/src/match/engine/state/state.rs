use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Idle,
    Playing,
    /// Short pause after a touchdown before the next kickoff.
    Scored,
    PeriodBreak,
    Ended,
}

impl MatchPhase {
    /// Players move, tag and score only in this phase.
    #[inline]
    pub fn is_simulating(&self) -> bool {
        *self == MatchPhase::Playing
    }

    /// The countdown keeps running through the touchdown pause.
    #[inline]
    pub fn is_clock_running(&self) -> bool {
        matches!(self, MatchPhase::Playing | MatchPhase::Scored)
    }
}

impl Display for MatchPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPhase::Idle => write!(f, "idle"),
            MatchPhase::Playing => write!(f, "playing"),
            MatchPhase::Scored => write!(f, "scored"),
            MatchPhase::PeriodBreak => write!(f, "period-break"),
            MatchPhase::Ended => write!(f, "ended"),
        }
    }
}

/// Match clock: phase, period and the countdown of the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub phase: MatchPhase,
    pub period: u8,
    pub seconds_remaining: u32,
}

impl GameState {
    pub fn new(period_seconds: u32) -> Self {
        GameState {
            phase: MatchPhase::Idle,
            period: 1,
            seconds_remaining: period_seconds,
        }
    }

    pub fn set(&mut self, phase: MatchPhase) {
        self.phase = phase;
    }

    /// One clock second. Returns whether the countdown moved.
    pub fn tick_clock(&mut self) -> bool {
        if !self.phase.is_clock_running() || self.seconds_remaining == 0 {
            return false;
        }

        self.seconds_remaining -= 1;

        true
    }

    /// Period expiry is only acted on while playing; during the touchdown
    /// pause it waits for the kickoff.
    #[inline]
    pub fn is_period_over(&self) -> bool {
        self.phase == MatchPhase::Playing && self.seconds_remaining == 0
    }
}
