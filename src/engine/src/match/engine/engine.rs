use crate::r#match::events::{EventCollection, MatchEvent};
use crate::r#match::random::{RandomSource, ThreadRandom};
use crate::r#match::settings::MatchSettings;
use crate::r#match::{
    steer_players, EndZones, FieldOrientation, GameState, MatchContext, MatchField, MatchPhase,
    MatchPlayer, MatchResult, PeriodTransition, PlayerId, Score, StateManager, TouchdownDetail,
};
use log::{debug, info, trace};

/// One match session: the entity store, possession, clock and score.
///
/// Nothing in here runs on its own. A driver (see `MatchScheduler`) calls
/// [`MatchEngine::game_tick`], [`MatchEngine::clock_tick`] and
/// [`MatchEngine::finish_touchdown`] on their cadences, and the UI calls the
/// action methods between ticks. Rejected actions return `false` and leave the
/// session untouched.
pub struct MatchEngine {
    pub field: MatchField,
    pub context: MatchContext,
    events: EventCollection,
    random: Box<dyn RandomSource>,
}

impl MatchEngine {
    pub fn new(settings: MatchSettings, orientation: FieldOrientation) -> Self {
        Self::with_random(settings, orientation, Box::new(ThreadRandom))
    }

    pub fn with_random(
        settings: MatchSettings,
        orientation: FieldOrientation,
        random: Box<dyn RandomSource>,
    ) -> Self {
        MatchEngine {
            field: MatchField::new(orientation),
            context: MatchContext::new(settings),
            events: EventCollection::new(),
            random,
        }
    }

    pub fn start_match(&mut self) -> bool {
        if !matches!(self.phase(), MatchPhase::Idle | MatchPhase::Ended) {
            debug!("start ignored in phase {}", self.phase());
            return false;
        }

        self.context.reset();
        self.field.ball.reset();

        StateManager::start(&mut self.context.state, &self.context.settings);

        info!("match started, orientation: {}", self.field.orientation);
        self.events.add(MatchEvent::MatchStarted);

        self.kickoff();

        true
    }

    pub fn request_pass(&mut self, target: PlayerId) -> bool {
        if !self.phase().is_simulating() {
            debug!("pass to {} ignored in phase {}", target, self.phase());
            return false;
        }

        match self.field.ball.pass_to(target, &self.field.players) {
            Some(event) => {
                debug!("ball passed: {:?}", event);
                self.events.add_ball_event(event);
                self.check_touchdown();
                true
            }
            None => false,
        }
    }

    /// Click-to-move for the selected human.
    pub fn move_selected(&mut self, x: f32, y: f32) -> bool {
        if !self.phase().is_simulating() {
            return false;
        }

        let Some(selected) = self.field.ball.selected_id() else {
            debug!("move ignored: no player selected");
            return false;
        };

        if !self.field.move_player(selected, x, y) {
            return false;
        }

        self.check_touchdown();

        true
    }

    pub fn resume_after_period_break(&mut self) -> bool {
        if !StateManager::resume_after_break(&mut self.context.state, &self.context.settings) {
            debug!("resume ignored in phase {}", self.phase());
            return false;
        }

        let period = self.context.state.period;

        info!("period {} started", period);
        self.events.add(MatchEvent::PeriodStarted { period });

        self.kickoff();

        true
    }

    /// Re-places both teams for the new layout; the ball stays with its holder.
    pub fn change_orientation(&mut self, orientation: FieldOrientation) -> bool {
        if orientation == self.field.orientation {
            return false;
        }

        info!("orientation changed to {}", orientation);

        self.field
            .relayout(orientation, &self.context.settings, self.random.as_mut());

        self.check_touchdown();

        true
    }

    /// One simulation step: steer and move everyone, then tag, then score.
    /// Does nothing outside the playing phase.
    pub fn game_tick(&mut self) -> bool {
        if !self.phase().is_simulating() {
            return false;
        }

        let owner = self.field.owner().cloned();

        let steering = steer_players(
            &self.field.players,
            owner.as_ref(),
            self.field.orientation,
            &self.context.settings,
            self.random.as_mut(),
        );

        self.field.advance_tick(&steering);

        if let Some(event) = self
            .field
            .ball
            .check_tag(&self.field.players, self.context.settings.tag_distance)
        {
            debug!("ball tagged by {}", event.to);
            self.events.add_ball_event(event);
        }

        self.check_touchdown();

        self.context.ticks_played += 1;

        if self.context.logging_enabled {
            self.trace_positions();
        }

        true
    }

    /// One second of match clock, resolving the period end when it hits zero.
    pub fn clock_tick(&mut self) -> bool {
        let moved = self.context.state.tick_clock();

        self.resolve_period_end();

        moved
    }

    /// End of the touchdown pause: fresh kickoff and back to play.
    pub fn finish_touchdown(&mut self) -> bool {
        if self.phase() != MatchPhase::Scored {
            return false;
        }

        self.context.state.set(MatchPhase::Playing);

        // the clock may have run out during the pause; a period change
        // brings its own kickoff, and the break and game end have none
        if !self.resolve_period_end() {
            self.kickoff();
        }

        true
    }

    fn kickoff(&mut self) {
        if let Some(event) = self
            .field
            .reset_kickoff(&self.context.settings, self.random.as_mut())
        {
            debug!("kickoff, ball to {}", event.to);
            self.events.add_ball_event(event);
        }

        self.check_touchdown();
    }

    fn check_touchdown(&mut self) -> bool {
        if !self.phase().is_simulating() {
            return false;
        }

        let end_zones = EndZones::from(self.field.orientation);

        let Some((side, player_id)) = self
            .field
            .owner()
            .and_then(|owner| end_zones.is_touchdown(owner).map(|side| (side, owner.id)))
        else {
            return false;
        };

        let points = self.context.settings.touchdown_points;
        let state = self.context.state;

        self.context.score.add_touchdown(
            TouchdownDetail {
                side,
                player_id,
                period: state.period,
                seconds_remaining: state.seconds_remaining,
            },
            points,
        );

        self.context.state.set(MatchPhase::Scored);

        info!(
            "touchdown {} by {}, score {}:{}",
            side.team_name(),
            player_id,
            self.context.score.offense,
            self.context.score.defense
        );

        self.events.add(MatchEvent::Touchdown {
            side,
            player_id,
            points,
        });

        true
    }

    /// Applies the period transition if the clock has run out. Returns
    /// whether one happened.
    fn resolve_period_end(&mut self) -> bool {
        let total_periods = self.context.settings.total_periods;
        let state = &mut self.context.state;

        let Some(transition) = StateManager::get_next_transition(state, total_periods) else {
            return false;
        };

        StateManager::handle_period_finish(state, transition, &self.context.settings);

        match transition {
            PeriodTransition::Break => {
                let period = self.context.state.period;

                info!("period {} is over, waiting for restart", period);
                self.events.add(MatchEvent::PeriodBreak { period });
            }
            PeriodTransition::NextPeriod(period) => {
                info!("period {} started", period);
                self.events.add(MatchEvent::PeriodStarted { period });

                self.kickoff();
            }
            PeriodTransition::GameOver => {
                let score = &self.context.score;

                info!("game over, humans {} : robots {}", score.offense, score.defense);
                self.events.add(MatchEvent::GameEnded {
                    offense: score.offense,
                    defense: score.defense,
                });
            }
        }

        true
    }

    fn trace_positions(&self) {
        for player in &self.field.players {
            trace!(
                "tick {}: {} at ({:.2}, {:.2}) v=({:.3}, {:.3})",
                self.context.ticks_played,
                player.id,
                player.position.x,
                player.position.y,
                player.velocity.x,
                player.velocity.y
            );
        }
    }

    #[inline]
    pub fn phase(&self) -> MatchPhase {
        self.context.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.context.state
    }

    pub fn score(&self) -> &Score {
        &self.context.score
    }

    pub fn owner_id(&self) -> Option<PlayerId> {
        self.field.ball.owner_id()
    }

    pub fn selected_id(&self) -> Option<PlayerId> {
        self.field.ball.selected_id()
    }

    pub fn players(&self) -> &[MatchPlayer] {
        &self.field.players
    }

    pub fn orientation(&self) -> FieldOrientation {
        self.field.orientation
    }

    pub fn enable_logging(&mut self) {
        self.context.enable_logging();
    }

    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::new(self.context.score.clone(), self.context.ticks_played)
    }
}
