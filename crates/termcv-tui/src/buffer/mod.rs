//! Off-screen cell grid that frames are drawn into before flushing

mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Buffer;
