//! Rules engine for a single-player game of battleship.
//!
//! A hidden fleet of five ships is seated on a rectangular grid, and the
//! player calls out coordinates one at a time until every ship is sunk.
//! This crate owns the rules only: the board model and fleet placement live
//! in [`board`], the ship classes in [`ships`], and the move list, move
//! validation, and status queries in [`game`]. Reading input and drawing
//! the grid are left to the embedding binary.

pub mod board;
pub mod game;
pub mod ships;
