use crate::factorial;
use crate::linear::matrix::Matrix;
use crate::poisson;
use crate::probs::SliceExt;

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}
impl Score {
    pub fn new(home: u8, away: u8) -> Self {
        Self { home, away }
    }

    pub fn nil_all() -> Self {
        Self { home: 0, away: 0 }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Fills the grid with products of independent Poisson masses. The distributions are
/// truncated to the grid; the tail mass beyond it is not redistributed.
pub fn from_independent_poisson(home_rate: f64, away_rate: f64, scoregrid: &mut Matrix<f64>) {
    let factorial = factorial::Lookup::default();
    for home_goals in 0..scoregrid.rows() {
        let home_prob = poisson::univariate(home_goals as u8, home_rate, &factorial);
        for away_goals in 0..scoregrid.cols() {
            let away_prob = poisson::univariate(away_goals as u8, away_rate, &factorial);
            scoregrid[(home_goals, away_goals)] = home_prob * away_prob;
        }
    }
}

/// Scales the 0-0 and 1-1 cells by `1 + rho` and the 1-0 and 0-1 cells by `1 - rho`,
/// then renormalises the grid to unit mass. A zero `rho` leaves the grid untouched,
/// including its truncation deficit.
pub fn apply_low_score_correlation(rho: f64, scoregrid: &mut Matrix<f64>) {
    if rho == 0.0 {
        return;
    }
    let reweights = [
        (0, 0, 1.0 + rho),
        (1, 1, 1.0 + rho),
        (1, 0, 1.0 - rho),
        (0, 1, 1.0 - rho),
    ];
    for (home_goals, away_goals, factor) in reweights {
        if home_goals < scoregrid.rows() && away_goals < scoregrid.cols() {
            scoregrid[(home_goals, away_goals)] *= factor;
        }
    }
    scoregrid.flatten_mut().normalise(1.0);
}

/// Mean home and away goals implied by the grid.
pub fn home_away_expectations(scoregrid: &Matrix<f64>) -> (f64, f64) {
    let (mut home_expectation, mut away_expectation) = (0.0, 0.0);

    for home_goals in 0..scoregrid.rows() {
        for away_goals in 0..scoregrid.cols() {
            let prob = scoregrid[(home_goals, away_goals)];
            home_expectation += home_goals as f64 * prob;
            away_expectation += away_goals as f64 * prob;
        }
    }

    (home_expectation, away_expectation)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Win(Side),
    Draw,
    /// Total goals strictly exceed the line; a total landing exactly on it counts as under.
    Over(f64),
    Under(f64),
    BothScored(bool),
    CorrectScore(Score),
}
impl Outcome {
    pub fn gather(&self, scoregrid: &Matrix<f64>) -> f64 {
        match self {
            Outcome::Win(side) => Self::gather_win(side, scoregrid),
            Outcome::Draw => Self::gather_draw(scoregrid),
            Outcome::Over(line) => Self::gather_goals_over(*line, scoregrid),
            Outcome::Under(line) => 1.0 - Self::gather_goals_over(*line, scoregrid),
            Outcome::BothScored(yes) => {
                let p_yes = Self::gather_both_scored(scoregrid);
                if *yes {
                    p_yes
                } else {
                    1.0 - p_yes
                }
            }
            Outcome::CorrectScore(score) => Self::gather_correct_score(score, scoregrid),
        }
    }

    fn gather_win(side: &Side, scoregrid: &Matrix<f64>) -> f64 {
        let mut prob = 0.0;
        match side {
            Side::Home => {
                for row in 1..scoregrid.rows() {
                    for col in 0..row {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
            Side::Away => {
                for col in 1..scoregrid.cols() {
                    for row in 0..col {
                        prob += scoregrid[(row, col)];
                    }
                }
            }
        }
        prob
    }

    fn gather_draw(scoregrid: &Matrix<f64>) -> f64 {
        let mut prob = 0.0;
        for index in 0..usize::min(scoregrid.rows(), scoregrid.cols()) {
            prob += scoregrid[(index, index)];
        }
        prob
    }

    fn gather_goals_over(line: f64, scoregrid: &Matrix<f64>) -> f64 {
        let mut prob = 0.0;
        for row in 0..scoregrid.rows() {
            for col in 0..scoregrid.cols() {
                if (row + col) as f64 > line {
                    prob += scoregrid[(row, col)];
                }
            }
        }
        prob
    }

    // inclusion-exclusion over the two blank-sheet events
    fn gather_both_scored(scoregrid: &Matrix<f64>) -> f64 {
        let home_blank = scoregrid.row_slice(0).sum();
        let mut away_blank = 0.0;
        for row in 0..scoregrid.rows() {
            away_blank += scoregrid[(row, 0)];
        }
        1.0 - home_blank - away_blank + scoregrid[(0, 0)]
    }

    fn gather_correct_score(score: &Score, scoregrid: &Matrix<f64>) -> f64 {
        if (score.home as usize) < scoregrid.rows() && (score.away as usize) < scoregrid.cols() {
            scoregrid[(score.home as usize, score.away as usize)]
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests;
