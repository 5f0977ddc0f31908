//! Reduction of a score grid into the flat mapping of market probabilities.

use serde::Serialize;

use crate::linear::matrix::Matrix;
use crate::probs::clamp01;
use crate::rates::Lambdas;
use crate::scoregrid::{Outcome, Side};

/// Emitted in place of a form model: no time-series form data is wired in, so the
/// stability fields report full confidence in the ratings as loaded.
const NEUTRAL_FORM_STABILITY: f64 = 1.0;

/// The full set of market probabilities for one fixture; the serialised field names
/// match the wire schema of the surrounding service. Probabilities are individually
/// clamped to [0, 1]; the two lambdas pass through unclamped.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    #[serde(rename = "ModelHomeProb")]
    pub home: f64,
    #[serde(rename = "ModelDrawProb")]
    pub draw: f64,
    #[serde(rename = "ModelAwayProb")]
    pub away: f64,
    #[serde(rename = "ModelOverProb")]
    pub over: f64,
    #[serde(rename = "ModelUnderProb")]
    pub under: f64,
    #[serde(rename = "ModelYesProb")]
    pub btts_yes: f64,
    #[serde(rename = "ModelNoProb")]
    pub btts_no: f64,
    #[serde(rename = "ModelHomeDNBProb")]
    pub home_dnb: f64,
    #[serde(rename = "ModelAwayDNBProb")]
    pub away_dnb: f64,
    #[serde(rename = "Model1XProb")]
    pub home_or_draw: f64,
    #[serde(rename = "Model12Prob")]
    pub home_or_away: f64,
    #[serde(rename = "ModelX2Prob")]
    pub draw_or_away: f64,
    #[serde(rename = "LambdaHome")]
    pub lambda_home: f64,
    #[serde(rename = "LambdaAway")]
    pub lambda_away: f64,
    #[serde(rename = "HomeFormStability")]
    pub home_form_stability: f64,
    #[serde(rename = "AwayFormStability")]
    pub away_form_stability: f64,
    #[serde(rename = "FormStability")]
    pub form_stability: f64,
}
impl Prediction {
    pub fn from_scoregrid(scoregrid: &Matrix<f64>, ou_line: f64, lambdas: &Lambdas) -> Self {
        let home = Outcome::Win(Side::Home).gather(scoregrid);
        let draw = Outcome::Draw.gather(scoregrid);
        let away = Outcome::Win(Side::Away).gather(scoregrid);
        let over = Outcome::Over(ou_line).gather(scoregrid);
        let under = 1.0 - over;
        let btts_yes = Outcome::BothScored(true).gather(scoregrid);
        let btts_no = 1.0 - btts_yes;

        let non_draw = 1.0 - draw;
        let (home_dnb, away_dnb) = if non_draw > 0.0 {
            (home / non_draw, away / non_draw)
        } else {
            // a certain draw is only reachable through pathological inputs
            (0.5, 0.5)
        };

        Self {
            home: clamp01(home),
            draw: clamp01(draw),
            away: clamp01(away),
            over: clamp01(over),
            under: clamp01(under),
            btts_yes: clamp01(btts_yes),
            btts_no: clamp01(btts_no),
            home_dnb: clamp01(home_dnb),
            away_dnb: clamp01(away_dnb),
            home_or_draw: clamp01(home + draw),
            home_or_away: clamp01(home + away),
            draw_or_away: clamp01(draw + away),
            lambda_home: lambdas.home,
            lambda_away: lambdas.away,
            home_form_stability: NEUTRAL_FORM_STABILITY,
            away_form_stability: NEUTRAL_FORM_STABILITY,
            form_stability: NEUTRAL_FORM_STABILITY,
        }
    }
}
