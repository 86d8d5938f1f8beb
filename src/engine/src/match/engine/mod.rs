pub mod ball;
pub mod context;
pub mod engine;
pub mod events;
pub mod field;
pub mod goal;
pub mod player;
pub mod random;
pub mod scheduler;
pub mod settings;
pub mod snapshot;
pub mod state;
pub mod tactics;

pub use ball::*;
pub use context::*;
pub use engine::*;
pub use events::*;
pub use field::*;
pub use goal::*;
pub use player::*;
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
pub use scheduler::*;
pub use settings::MatchSettings;
pub use snapshot::*;
pub use state::*;
pub use tactics::*;
