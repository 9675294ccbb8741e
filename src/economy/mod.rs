//! Static economy tables and the pure derivation functions over them.

pub mod buildings;
pub mod daily;
pub mod serfs;
pub mod titles;
