//! Analytical views over the match store: for/against reshaping and
//! match-, league-, and team-level descriptive statistics.

pub mod export;
pub mod league_summary;
pub mod match_summary;
pub mod perspective;
pub mod team_summary;

/// Pitch length used to project normalized coordinates, in meters.
pub const PITCH_X: f64 = 95.65;
/// Pitch width used to project normalized coordinates, in meters.
pub const PITCH_Y: f64 = 70.0;

/// Round to three decimals, the precision used in every printed table.
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
