//! Remote source client: fetches understat match pages and decodes the
//! shots payload embedded in their script tags.

pub mod http;
pub mod types;

pub use http::{ShotSource, UnderstatClient};
