//! Resolution of a fixture into its two expected-goal rates.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamRating {
    pub attack: f64,
    pub defense: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueParams {
    pub mu: f64,
    pub home_advantage: f64,
    #[serde(default)]
    pub dc_rho: f64,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    /// Carried for reporting only; takes no part in the model.
    pub date: String,
}

/// An identifier that could not be resolved against the loaded tables.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnknownEntity {
    #[error("league '{0}' not found")]
    League(String),

    #[error("missing rating for home team '{0}'")]
    HomeTeam(String),

    #[error("missing rating for away team '{0}'")]
    AwayTeam(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lambdas {
    pub home: f64,
    pub away: f64,
    pub dc_rho: f64,
}

/// An immutable snapshot of the team and league tables.
#[derive(Clone, Debug, Default)]
pub struct Ratings {
    teams: FxHashMap<String, TeamRating>,
    leagues: FxHashMap<String, LeagueParams>,
}
impl Ratings {
    pub fn new(
        teams: FxHashMap<String, TeamRating>,
        leagues: FxHashMap<String, LeagueParams>,
    ) -> Self {
        Self { teams, leagues }
    }

    pub fn team(&self, id: &str) -> Option<&TeamRating> {
        self.teams.get(id)
    }

    pub fn league(&self, id: &str) -> Option<&LeagueParams> {
        self.leagues.get(id)
    }

    /// Derives the expected-goal rates for a fixture. All three identifiers are
    /// resolved before any arithmetic, so the caller learns precisely which one missed.
    pub fn lambdas(&self, fixture: &Fixture) -> Result<Lambdas, UnknownEntity> {
        let league = self
            .leagues
            .get(&fixture.league)
            .ok_or_else(|| UnknownEntity::League(fixture.league.clone()))?;
        let home = self
            .teams
            .get(&fixture.home_team)
            .ok_or_else(|| UnknownEntity::HomeTeam(fixture.home_team.clone()))?;
        let away = self
            .teams
            .get(&fixture.away_team)
            .ok_or_else(|| UnknownEntity::AwayTeam(fixture.away_team.clone()))?;

        let lambda_home =
            league.mu * f64::exp(league.home_advantage + home.attack - away.defense);
        let lambda_away = league.mu * f64::exp(away.attack - home.defense);
        Ok(Lambdas {
            home: lambda_home,
            away: lambda_away,
            dc_rho: league.dc_rho,
        })
    }
}
