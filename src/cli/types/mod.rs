//! Type-safe wrappers and enums for understat match data.

pub mod league;
pub mod season;

pub use league::League;
pub use season::Season;
