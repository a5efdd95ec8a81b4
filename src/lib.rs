//! # Boggle
//!
//! The game engine for Boggle: a 4×4 [board](board::Board) of letter
//! [cubes](cube::Cube), the [sources of chance](gambler) that shake them into
//! place, and the [dictionary](dictionary::Dictionary) that judges the
//! player's words.

pub mod board;
pub mod cube;
pub mod dictionary;
pub mod gambler;
