pub mod roster;
pub mod toi;
