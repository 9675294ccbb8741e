//! Game state and the validated actions that mutate it.

pub mod constants;
pub mod game_logic;
pub mod game_state;
