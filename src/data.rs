//! Loading of the persisted rating and league parameter tables.

use std::fs::File;
use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::from_reader;

use crate::rates::{LeagueParams, Ratings, TeamRating};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, io::Error> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

/// Loads both lookup tables into an immutable [`Ratings`] snapshot. The team file maps
/// team identifier to rating; the league file maps league identifier to its parameters.
pub fn load_ratings(
    teams_path: impl AsRef<Path>,
    leagues_path: impl AsRef<Path>,
) -> Result<Ratings, io::Error> {
    let teams: FxHashMap<String, TeamRating> = read_json(teams_path)?;
    let leagues: FxHashMap<String, LeagueParams> = read_json(leagues_path)?;
    Ok(Ratings::new(teams, leagues))
}
