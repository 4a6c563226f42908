//! Constraint-based splitting of screen areas

mod constraint;
mod flex;

pub use constraint::Constraint;
pub use flex::{Direction, Layout};
