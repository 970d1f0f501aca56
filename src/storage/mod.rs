//! Storage layer: the on-disk match store and its side files.
//!
//! - `store`: one JSON file per match under `<root>/<league>/<season>/`
//! - `index`: the `league_ids.dat` league/season → match-id index
//! - `teams`: the static team → league mapping (`teams_dict.json`)

pub mod index;
pub mod store;
pub mod teams;

pub use index::{classify, read_index, write_index};
pub use store::MatchStore;
pub use teams::TeamLeagueMap;
