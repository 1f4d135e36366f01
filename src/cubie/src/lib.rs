#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! A 3x3x3 cube in cubie representation with a WCA notation move engine.

pub mod geometry;
mod moves;
pub mod notation;
mod state;
pub mod stickers;

pub use geometry::Face;
pub use moves::MoveError;
pub use notation::{Turn, inverse_token};
pub use state::{Corner, CubeState, Edge};
