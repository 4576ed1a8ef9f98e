pub mod alpha_beta;
pub mod minimax;
pub mod parallel;

pub use alpha_beta::*;
pub use minimax::*;
pub use parallel::*;
