use crate::r#match::{FieldOrientation, MatchEngine, MatchPhase};
use log::debug;

/// Repeating timer that is armed for a key.
///
/// Re-syncing with a different key restarts the countdown, and syncing with
/// `None` disarms it. This mirrors an interval that is torn down and
/// recreated whenever its inputs change.
#[derive(Debug, Clone)]
pub struct Timer<K> {
    interval_ms: u64,
    elapsed_ms: u64,
    armed_for: Option<K>,
}

impl<K: Copy + PartialEq> Timer<K> {
    pub fn new(interval_ms: u64) -> Self {
        Timer {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed_for: None,
        }
    }

    pub fn sync(&mut self, key: Option<K>) {
        if key != self.armed_for {
            self.armed_for = key;
            self.elapsed_ms = 0;
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed_for.is_some()
    }

    pub fn remaining(&self) -> Option<u64> {
        self.is_armed()
            .then(|| self.interval_ms.saturating_sub(self.elapsed_ms))
    }

    pub fn advance(&mut self, dt_ms: u64) {
        if self.is_armed() {
            self.elapsed_ms += dt_ms;
        }
    }

    #[inline]
    pub fn is_due(&self) -> bool {
        self.is_armed() && self.elapsed_ms >= self.interval_ms
    }

    fn rearm(&mut self) {
        self.elapsed_ms = self.elapsed_ms.saturating_sub(self.interval_ms);
    }
}

/// Drives a [`MatchEngine`] on virtual time: the simulation step, the one
/// second clock and the delayed kickoff after a touchdown.
///
/// Only timers whose phase is active are armed, so nothing fires after the
/// match ends or once [`MatchScheduler::stop`] is called.
#[derive(Debug)]
pub struct MatchScheduler {
    simulation: Timer<FieldOrientation>,
    clock: Timer<u8>,
    kickoff: Timer<usize>,
    now_ms: u64,
    stopped: bool,
}

impl MatchScheduler {
    pub fn new(engine: &MatchEngine) -> Self {
        let settings = &engine.context.settings;

        let mut scheduler = MatchScheduler {
            simulation: Timer::new(settings.simulation_tick_ms),
            clock: Timer::new(settings.clock_tick_ms),
            kickoff: Timer::new(settings.touchdown_kickoff_delay_ms),
            now_ms: 0,
            stopped: false,
        };

        scheduler.sync(engine);
        scheduler
    }

    /// Moves virtual time forward by `dt_ms`, firing every timer that comes
    /// due on the way. Returns the number of simulation steps run.
    pub fn advance(&mut self, engine: &mut MatchEngine, dt_ms: u64) -> u32 {
        if self.stopped {
            return 0;
        }

        // actions taken between calls may have changed the phase
        self.sync(engine);

        let target_ms = self.now_ms.saturating_add(dt_ms);
        let mut steps = 0;

        loop {
            let next_due = [
                self.kickoff.remaining(),
                self.clock.remaining(),
                self.simulation.remaining(),
            ]
            .into_iter()
            .flatten()
            .min();

            let step_ms = match next_due {
                Some(remaining) if self.now_ms.saturating_add(remaining) <= target_ms => remaining,
                _ => {
                    self.step_timers(target_ms - self.now_ms);
                    self.now_ms = target_ms;
                    break;
                }
            };

            self.step_timers(step_ms);
            self.now_ms += step_ms;

            if self.kickoff.is_due() {
                self.kickoff.rearm();
                engine.finish_touchdown();
                self.sync(engine);
            }

            if self.clock.is_due() {
                self.clock.rearm();
                engine.clock_tick();
                self.sync(engine);
            }

            if self.simulation.is_due() {
                self.simulation.rearm();
                if engine.game_tick() {
                    steps += 1;
                }
                self.sync(engine);
            }
        }

        steps
    }

    /// Cancels every timer for good.
    pub fn stop(&mut self) {
        debug!("scheduler stopped at {}ms", self.now_ms);

        self.stopped = true;
        self.simulation.sync(None);
        self.clock.sync(None);
        self.kickoff.sync(None);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    fn step_timers(&mut self, dt_ms: u64) {
        self.simulation.advance(dt_ms);
        self.clock.advance(dt_ms);
        self.kickoff.advance(dt_ms);
    }

    fn sync(&mut self, engine: &MatchEngine) {
        let phase = engine.phase();

        self.simulation
            .sync(phase.is_simulating().then_some(engine.orientation()));
        self.clock
            .sync(phase.is_clock_running().then_some(engine.state().period));
        self.kickoff.sync(
            (phase == MatchPhase::Scored).then_some(engine.score().details.len()),
        );
    }
}
