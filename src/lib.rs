// Gambito - Generic Minimax Search Engine Library

pub mod board;
pub mod core;
pub mod eval;
pub mod search;

pub use core::*;
