use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::linear::matrix::Matrix;
use crate::markets::Prediction;
use crate::probs::SliceExt;
use crate::rates::{Fixture, Ratings, UnknownEntity};
use crate::scoregrid;

pub const DEFAULT_OU_LINE: f64 = 2.5;
pub const DEFAULT_MAX_GOALS: usize = 10;
const MIN_MAX_GOALS: usize = 6;
const MAX_MAX_GOALS: usize = 15;

// below this retained mass the truncated tail is no longer negligible
const MIN_RETAINED_MASS: f64 = 0.999;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub ou_line: f64,
    /// Inclusive upper bound on goals per side; the grid is `(max_goals + 1)` square.
    pub max_goals: usize,
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.max_goals < MIN_MAX_GOALS || self.max_goals > MAX_MAX_GOALS {
            return Err(InvalidConfig::MaxGoalsOutOfRange(self.max_goals));
        }
        if !self.ou_line.is_finite() {
            return Err(InvalidConfig::NonFiniteLine(self.ou_line));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ou_line: DEFAULT_OU_LINE,
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidConfig {
    #[error("max_goals of {0} is outside the supported range of {MIN_MAX_GOALS}..={MAX_MAX_GOALS}")]
    MaxGoalsOutOfRange(usize),

    #[error("over/under line of {0} is not a finite number")]
    NonFiniteLine(f64),
}

/// Always a caller-input problem: either the request tunables are out of range or an
/// identifier could not be resolved. Nothing here is retryable.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PredictionError {
    #[error("{0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("{0}")]
    UnknownEntity(#[from] UnknownEntity),
}

/// Holds only the shared ratings snapshot, so clones are cheap and arbitrarily many
/// callers may predict concurrently.
#[derive(Clone, Debug)]
pub struct Engine {
    ratings: Arc<Ratings>,
}
impl Engine {
    pub fn new(ratings: Ratings) -> Self {
        Self {
            ratings: Arc::new(ratings),
        }
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    /// Publishes a fresh snapshot; in-flight predictions keep the one they started with.
    pub fn reload(&mut self, ratings: Ratings) {
        self.ratings = Arc::new(ratings);
    }

    pub fn predict(
        &self,
        fixture: &Fixture,
        config: &Config,
    ) -> Result<Prediction, PredictionError> {
        config.validate()?;
        let lambdas = self.ratings.lambdas(fixture)?;
        debug!(
            "'{}' vs '{}' in '{}': λ_home={:.6}, λ_away={:.6}, ρ={}",
            fixture.home_team, fixture.away_team, fixture.league,
            lambdas.home, lambdas.away, lambdas.dc_rho
        );

        let mut grid = Matrix::allocate(config.max_goals + 1, config.max_goals + 1);
        scoregrid::from_independent_poisson(lambdas.home, lambdas.away, &mut grid);
        let retained = grid.flatten().sum();
        if retained < MIN_RETAINED_MASS {
            warn!(
                "grid bounded at {} goals retains only {retained:.6} of the probability mass",
                config.max_goals
            );
        }
        scoregrid::apply_low_score_correlation(lambdas.dc_rho, &mut grid);
        let (home_expectation, away_expectation) = scoregrid::home_away_expectations(&grid);
        debug!(
            "grid-implied expected goals: home={home_expectation:.3}, away={away_expectation:.3}"
        );

        Ok(Prediction::from_scoregrid(&grid, config.ou_line, &lambdas))
    }
}
