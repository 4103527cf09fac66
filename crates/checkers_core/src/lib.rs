pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod time_control;
pub mod types;

// Re-export core game logic (not player-specific)
pub use board::*;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use time_control::*;
pub use types::*;
