//! Posad: an idle settlement game engine.
//!
//! Grow a medieval posad from a lone izba, climb the title ladder as
//! hourly income rises, fight cave monsters and rival settlements, and
//! hold captured serfs for their labor or their ransom.
//!
//! The crate is the full simulation core: static economy tables, a
//! turn-based combat resolver, weighted loot tables, the daily-bonus
//! streak machine, and the validated action layer over the save state.
//! There is no rendering here; callers drive actions and read the
//! notification buffer.

pub mod combat;
pub mod core;
pub mod economy;
pub mod events;
pub mod loot;
pub mod persistence;
pub mod simulator;
