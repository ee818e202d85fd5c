//! Core logic for a single-player grid-reveal puzzle game.
//!
//! The crate owns the board (bomb placement, adjacency counts, cell state)
//! and the reveal engine (flood-fill reveal, flagging, win/loss detection).
//! Rendering, input mapping, and animation live in the embedding
//! presentation layer, which drives the operations exposed here and reacts
//! to the [`RevealOutcome`] they return.

pub use board::*;
pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod types;
