//! Command implementations for the understat xG CLI

pub mod common;
pub mod find_ids;
pub mod league_report;
pub mod match_report;
pub mod team_report;
pub mod update_data;
