use crate::r#match::FieldOrientation;
use nalgebra::Vector2;

pub const FORMATION_SIZE: usize = 4;

// Humans start on the right half (landscape) or bottom half (portrait) and
// attack toward the low end of the field.
const LANDSCAPE_OFFENSE: [(f32, f32); FORMATION_SIZE] =
    [(82.0, 60.0), (74.0, 50.0), (74.0, 70.0), (66.0, 60.0)];
const LANDSCAPE_DEFENSE: [(f32, f32); FORMATION_SIZE] =
    [(22.0, 40.0), (18.0, 60.0), (30.0, 48.0), (30.0, 72.0)];

const PORTRAIT_OFFENSE: [(f32, f32); FORMATION_SIZE] =
    [(50.0, 82.0), (40.0, 74.0), (60.0, 74.0), (50.0, 66.0)];
const PORTRAIT_DEFENSE: [(f32, f32); FORMATION_SIZE] =
    [(22.0, 34.0), (50.0, 30.0), (78.0, 34.0), (50.0, 22.0)];

/// Kickoff anchors for both teams, in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub offense: [Vector2<f32>; FORMATION_SIZE],
    pub defense: [Vector2<f32>; FORMATION_SIZE],
}

impl Formation {
    pub fn for_orientation(orientation: FieldOrientation) -> Self {
        let (offense, defense) = match orientation {
            FieldOrientation::Landscape => (LANDSCAPE_OFFENSE, LANDSCAPE_DEFENSE),
            FieldOrientation::Portrait => (PORTRAIT_OFFENSE, PORTRAIT_DEFENSE),
        };

        Formation {
            offense: offense.map(|(x, y)| Vector2::new(x, y)),
            defense: defense.map(|(x, y)| Vector2::new(x, y)),
        }
    }
}
