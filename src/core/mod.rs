pub mod rules;
pub mod types;

pub use rules::*;
pub use types::*;
