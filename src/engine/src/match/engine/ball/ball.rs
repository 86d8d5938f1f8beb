use crate::r#match::ball::events::{BallEvent, PossessionChange};
use crate::r#match::random::RandomSource;
use crate::r#match::{MatchPlayer, PlayerId, PlayerSide};
use log::debug;

/// Possession tracker. The ball has no position of its own; it travels with
/// its owner.
#[derive(Debug, Default, Clone)]
pub struct Ball {
    pub previous_owner: Option<PlayerId>,
    pub current_owner: Option<PlayerId>,
    /// Human the user moves with click-to-move.
    pub selected_player: Option<PlayerId>,
}

impl Ball {
    pub fn new() -> Self {
        Ball::default()
    }

    #[inline]
    pub fn owner_id(&self) -> Option<PlayerId> {
        self.current_owner
    }

    #[inline]
    pub fn selected_id(&self) -> Option<PlayerId> {
        self.selected_player
    }

    pub fn set_owner(&mut self, owner: Option<PlayerId>) {
        if owner != self.current_owner {
            self.previous_owner = self.current_owner;
            self.current_owner = owner;
        }
    }

    /// Kickoff: any player from either team is equally likely to get the ball.
    pub fn assign_random_owner(
        &mut self,
        players: &[MatchPlayer],
        random: &mut dyn RandomSource,
    ) -> Option<BallEvent> {
        if players.is_empty() {
            self.set_owner(None);
            return None;
        }

        let from = self.current_owner;
        let owner = players[random.index(players.len())].id;

        self.previous_owner = from;
        self.current_owner = Some(owner);

        if owner.side == PlayerSide::Offense {
            self.selected_player = Some(owner);
        }

        Some(BallEvent::new(PossessionChange::Kickoff, from, owner))
    }

    /// Hands the ball between humans. Ignored unless a human holds it and
    /// `target` is another live human.
    pub fn pass_to(&mut self, target: PlayerId, players: &[MatchPlayer]) -> Option<BallEvent> {
        let from = match self.current_owner {
            Some(owner) if owner.side == PlayerSide::Offense => owner,
            _ => {
                debug!("pass to {} ignored: humans do not hold the ball", target);
                return None;
            }
        };

        if target == from {
            debug!("pass to {} ignored: already holds the ball", target);
            return None;
        }

        let target_exists = players
            .iter()
            .any(|p| p.id == target && p.side == PlayerSide::Offense);

        if !target_exists {
            debug!("pass to {} ignored: no such human", target);
            return None;
        }

        self.set_owner(Some(target));
        self.selected_player = Some(target);

        Some(BallEvent::new(PossessionChange::Passed, Some(from), target))
    }

    /// Steal check: any opponent within `tag_distance` of the owner takes the
    /// ball. With several in range the last one in roster order wins.
    pub fn check_tag(&mut self, players: &[MatchPlayer], tag_distance: f32) -> Option<BallEvent> {
        let owner = self
            .current_owner
            .and_then(|id| players.iter().find(|p| p.id == id))?;

        let tagger = players
            .iter()
            .filter(|p| p.side == owner.side.opposite())
            .filter(|p| p.distance_to(&owner.position) < tag_distance)
            .last()?;

        let event = BallEvent::new(PossessionChange::Tagged, Some(owner.id), tagger.id);

        self.set_owner(Some(tagger.id));

        Some(event)
    }

    pub fn reset(&mut self) {
        *self = Ball::default();
    }
}
