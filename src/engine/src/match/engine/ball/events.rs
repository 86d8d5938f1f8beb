use crate::r#match::PlayerId;
use serde::Serialize;

/// How the ball changed hands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionChange {
    Kickoff,
    Passed,
    Tagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BallEvent {
    pub change: PossessionChange,
    pub from: Option<PlayerId>,
    pub to: PlayerId,
}

impl BallEvent {
    pub fn new(change: PossessionChange, from: Option<PlayerId>, to: PlayerId) -> Self {
        BallEvent { change, from, to }
    }
}
