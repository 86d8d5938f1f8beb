pub const PERIOD_SECONDS: u32 = 20;
pub const TOTAL_PERIODS: u8 = 4;
pub const TOUCHDOWN_POINTS: u32 = 7;

pub const SIMULATION_TICK_MS: u64 = 40;
pub const CLOCK_TICK_MS: u64 = 1000;
pub const TOUCHDOWN_KICKOFF_DELAY_MS: u64 = 1200;

// Movement tuning, humans and robots share the same envelope
pub const DRIFT_SPEED: f32 = 0.04;
pub const WANDER_JITTER: f32 = 0.08;
pub const IDLE_MAX_SPEED: f32 = 0.35;
pub const CARRY_SPEED: f32 = 0.35;
pub const SUPPORT_SPEED: f32 = 0.3;

pub const SEPARATION_RADIUS: f32 = 6.0;
pub const SEPARATION_STRENGTH: f32 = 0.06;

pub const TAG_DISTANCE: f32 = 5.0;
pub const KICKOFF_VELOCITY_SPREAD: f32 = 0.2;

/// Tuning knobs for a single match. `Default` reproduces the stock game.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSettings {
    pub period_seconds: u32,
    pub total_periods: u8,
    pub touchdown_points: u32,

    pub simulation_tick_ms: u64,
    pub clock_tick_ms: u64,
    pub touchdown_kickoff_delay_ms: u64,

    pub drift_speed: f32,
    pub wander_jitter: f32,
    pub idle_max_speed: f32,
    pub carry_speed: f32,
    pub support_speed: f32,

    pub separation_radius: f32,
    pub separation_strength: f32,

    pub tag_distance: f32,
    pub kickoff_velocity_spread: f32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        MatchSettings {
            period_seconds: PERIOD_SECONDS,
            total_periods: TOTAL_PERIODS,
            touchdown_points: TOUCHDOWN_POINTS,
            simulation_tick_ms: SIMULATION_TICK_MS,
            clock_tick_ms: CLOCK_TICK_MS,
            touchdown_kickoff_delay_ms: TOUCHDOWN_KICKOFF_DELAY_MS,
            drift_speed: DRIFT_SPEED,
            wander_jitter: WANDER_JITTER,
            idle_max_speed: IDLE_MAX_SPEED,
            carry_speed: CARRY_SPEED,
            support_speed: SUPPORT_SPEED,
            separation_radius: SEPARATION_RADIUS,
            separation_strength: SEPARATION_STRENGTH,
            tag_distance: TAG_DISTANCE,
            kickoff_velocity_spread: KICKOFF_VELOCITY_SPREAD,
        }
    }
}

impl MatchSettings {
    pub fn with_period_seconds(mut self, period_seconds: u32) -> Self {
        self.period_seconds = period_seconds;
        self
    }
}
