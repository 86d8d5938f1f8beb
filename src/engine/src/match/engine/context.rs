use crate::r#match::settings::MatchSettings;
use crate::r#match::{GameState, Score};

pub struct MatchContext {
    pub settings: MatchSettings,
    pub state: GameState,
    pub score: Score,
    pub ticks_played: u64,

    pub(crate) logging_enabled: bool,
}

impl MatchContext {
    pub fn new(settings: MatchSettings) -> Self {
        MatchContext {
            state: GameState::new(settings.period_seconds),
            score: Score::new(),
            ticks_played: 0,
            settings,
            logging_enabled: false,
        }
    }

    /// Per-tick position tracing at `trace` level.
    pub fn enable_logging(&mut self) {
        self.logging_enabled = true;
    }

    pub fn reset(&mut self) {
        self.state = GameState::new(self.settings.period_seconds);
        self.score = Score::new();
        self.ticks_played = 0;
    }
}
