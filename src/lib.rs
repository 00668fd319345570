pub mod camera;
pub mod cell;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod world;

/// Screen dimension, in terminal character cells.
pub type ScreenSize = u16;

/// World coordinate of a cell on the unbounded lattice.
pub type Coord = i32;
