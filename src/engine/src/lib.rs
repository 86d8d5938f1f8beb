pub mod r#match;

pub use r#match::*;
pub use nalgebra::Vector2;
