use crate::r#match::ball::BallEvent;
use crate::r#match::{PlayerId, PlayerSide};
use serde::Serialize;

/// Notifications for the presentation layer (sound cues, overlays).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    MatchStarted,
    Possession(BallEvent),
    Touchdown {
        side: PlayerSide,
        player_id: PlayerId,
        points: u32,
    },
    PeriodBreak {
        period: u8,
    },
    PeriodStarted {
        period: u8,
    },
    GameEnded {
        offense: u32,
        defense: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventCollection {
    events: Vec<MatchEvent>,
}

impl EventCollection {
    pub fn new() -> Self {
        EventCollection { events: Vec::with_capacity(8) }
    }

    pub fn add(&mut self, event: MatchEvent) {
        self.events.push(event);
    }

    pub fn add_ball_event(&mut self, event: BallEvent) {
        self.events.push(MatchEvent::Possession(event));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchEvent> {
        self.events.iter()
    }

    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::ball::PossessionChange;

    #[test]
    fn test_drain_empties_collection() {
        let mut events = EventCollection::new();
        events.add(MatchEvent::MatchStarted);
        events.add(MatchEvent::PeriodBreak { period: 1 });

        assert_eq!(events.iter().count(), 2);
        assert_eq!(events.drain().len(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_events_serialize_with_type_tag() {
        let touchdown = MatchEvent::Touchdown {
            side: PlayerSide::Defense,
            player_id: PlayerId::new(PlayerSide::Defense, 3),
            points: 7,
        };

        let json = serde_json::to_value(touchdown).unwrap();

        assert_eq!(json["type"], "touchdown");
        assert_eq!(json["side"], "defense");
        assert_eq!(json["player_id"], "R3");

        let pass = MatchEvent::Possession(BallEvent::new(
            PossessionChange::Passed,
            Some(PlayerId::new(PlayerSide::Offense, 1)),
            PlayerId::new(PlayerSide::Offense, 4),
        ));

        let json = serde_json::to_value(pass).unwrap();

        assert_eq!(json["type"], "possession");
        assert_eq!(json["to"], "H4");
    }
}
