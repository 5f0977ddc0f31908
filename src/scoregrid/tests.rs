use super::*;
use assert_float_eq::*;

fn create_test_3x3_scoregrid() -> Matrix<f64> {
    let mut scoregrid = Matrix::allocate(3, 3);
    scoregrid[0].copy_from_slice(&[0.10, 0.05, 0.05]);
    scoregrid[1].copy_from_slice(&[0.15, 0.20, 0.05]);
    scoregrid[2].copy_from_slice(&[0.10, 0.15, 0.15]);
    scoregrid
}

#[test]
fn independent_poisson_sums_to_one() {
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(1.0, 1.0, &mut scoregrid);
    assert_float_absolute_eq!(1.0, scoregrid.flatten().sum(), 1e-6);
}

#[test]
fn independent_poisson_truncation_deficit() {
    // rates this high lose visible tail mass on an 11x11 grid; the builder keeps the
    // deficit rather than redistributing it
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(2.2258, 1.6489, &mut scoregrid);
    let sum = scoregrid.flatten().sum();
    assert!(sum < 1.0, "sum was {sum}");
    assert_float_absolute_eq!(1.0, sum, 1e-4);
}

#[test]
fn independent_poisson_cell_values() {
    let mut scoregrid = Matrix::allocate(6, 6);
    from_independent_poisson(1.0, 2.5, &mut scoregrid);
    assert_float_relative_eq!(
        0.36787944117144233 * 0.0820849986238988,
        scoregrid[(0, 0)]
    );
    assert_float_relative_eq!(
        0.18393972058572117 * 0.205212496559747,
        scoregrid[(2, 1)]
    );
}

#[test]
fn degenerate_rates_collapse_to_nil_all() {
    let mut scoregrid = Matrix::allocate(7, 7);
    from_independent_poisson(0.0, 0.0, &mut scoregrid);
    assert_eq!(1.0, scoregrid[(0, 0)]);
    assert_eq!(1.0, scoregrid.flatten().sum());
    assert_eq!(1.0, Outcome::Draw.gather(&scoregrid));
    assert_eq!(0.0, Outcome::Win(Side::Home).gather(&scoregrid));
    assert_eq!(0.0, Outcome::Win(Side::Away).gather(&scoregrid));
    assert_eq!(0.0, Outcome::BothScored(true).gather(&scoregrid));
    assert_eq!(1.0, Outcome::CorrectScore(Score::nil_all()).gather(&scoregrid));
}

#[test]
fn correlation_adjustment_reweights_low_scores() {
    let mut scoregrid = create_test_3x3_scoregrid();
    apply_low_score_correlation(0.2, &mut scoregrid);
    // reweighted mass is 1.02 before renormalisation
    assert_float_absolute_eq!(1.0, scoregrid.flatten().sum(), 1e-9);
    assert_float_absolute_eq!(0.12 / 1.02, scoregrid[(0, 0)], 1e-9);
    assert_float_absolute_eq!(0.24 / 1.02, scoregrid[(1, 1)], 1e-9);
    assert_float_absolute_eq!(0.12 / 1.02, scoregrid[(1, 0)], 1e-9);
    assert_float_absolute_eq!(0.04 / 1.02, scoregrid[(0, 1)], 1e-9);
    assert_float_absolute_eq!(0.15 / 1.02, scoregrid[(2, 1)], 1e-9);
    assert_float_absolute_eq!(0.5, Outcome::Draw.gather(&scoregrid), 1e-9);
}

#[test]
fn correlation_adjustment_raises_draw() {
    let mut uncorrelated = Matrix::allocate(11, 11);
    from_independent_poisson(1.0, 1.0, &mut uncorrelated);
    let mut correlated = uncorrelated.clone();
    apply_low_score_correlation(0.1, &mut correlated);

    assert_float_absolute_eq!(1.0, correlated.flatten().sum(), 1e-9);
    let p_draw_uncorrelated = Outcome::Draw.gather(&uncorrelated);
    let p_draw_correlated = Outcome::Draw.gather(&correlated);
    assert!(
        p_draw_correlated > p_draw_uncorrelated,
        "{p_draw_correlated} <= {p_draw_uncorrelated}"
    );
}

#[test]
fn correlation_adjustment_zero_rho_is_noop() {
    let mut scoregrid = create_test_3x3_scoregrid();
    apply_low_score_correlation(0.0, &mut scoregrid);
    assert_eq!(create_test_3x3_scoregrid(), scoregrid);
}

#[test]
fn outcome_win_gather() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.40, Outcome::Win(Side::Home).gather(&scoregrid));
    assert_float_absolute_eq!(0.15, Outcome::Win(Side::Away).gather(&scoregrid));
}

#[test]
fn outcome_draw_gather() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.45, Outcome::Draw.gather(&scoregrid));
}

#[test]
fn outcome_goals_ou_gather_fractional_line() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.70, Outcome::Over(1.5).gather(&scoregrid));
    assert_float_absolute_eq!(0.30, Outcome::Under(1.5).gather(&scoregrid));
}

#[test]
fn outcome_goals_ou_gather_integral_line_ties_count_as_under() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.35, Outcome::Over(2.0).gather(&scoregrid));
    assert_float_absolute_eq!(0.65, Outcome::Under(2.0).gather(&scoregrid));
}

#[test]
fn outcome_both_scored_gather() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.55, Outcome::BothScored(true).gather(&scoregrid));
    assert_float_absolute_eq!(0.45, Outcome::BothScored(false).gather(&scoregrid));
}

#[test]
fn outcome_correct_score_gather() {
    let scoregrid = create_test_3x3_scoregrid();
    assert_float_absolute_eq!(0.20, Outcome::CorrectScore(Score::new(1, 1)).gather(&scoregrid));
    assert_eq!(0.0, Outcome::CorrectScore(Score::new(5, 0)).gather(&scoregrid));
}

#[test]
fn result_trio_partitions_grid_mass() {
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(2.2258, 1.6489, &mut scoregrid);
    let trio = Outcome::Win(Side::Home).gather(&scoregrid)
        + Outcome::Draw.gather(&scoregrid)
        + Outcome::Win(Side::Away).gather(&scoregrid);
    assert_float_absolute_eq!(scoregrid.flatten().sum(), trio, 1e-12);
}

#[test]
fn swapping_rates_swaps_sides() {
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(2.2, 1.6, &mut scoregrid);
    let mut transposed = Matrix::allocate(11, 11);
    from_independent_poisson(1.6, 2.2, &mut transposed);

    assert_float_absolute_eq!(
        Outcome::Win(Side::Home).gather(&scoregrid),
        Outcome::Win(Side::Away).gather(&transposed),
        1e-12
    );
    assert_float_absolute_eq!(
        Outcome::Win(Side::Away).gather(&scoregrid),
        Outcome::Win(Side::Home).gather(&transposed),
        1e-12
    );
    assert_float_absolute_eq!(
        Outcome::Draw.gather(&scoregrid),
        Outcome::Draw.gather(&transposed),
        1e-12
    );
}

#[test]
fn correlation_adjustment_shifts_expectations() {
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(3.0, 1.5, &mut scoregrid);
    let (home_before, away_before) = home_away_expectations(&scoregrid);
    apply_low_score_correlation(0.1, &mut scoregrid);
    let (home_after, away_after) = home_away_expectations(&scoregrid);

    // reweighting the four low-score cells perturbs the marginal means
    assert!(home_after < home_before, "{home_after} >= {home_before}");
    assert!(away_after > away_before, "{away_after} <= {away_before}");
}

#[test]
fn expectations_approach_rates() {
    let mut scoregrid = Matrix::allocate(11, 11);
    from_independent_poisson(1.0, 0.5, &mut scoregrid);
    let (home_expectation, away_expectation) = home_away_expectations(&scoregrid);
    assert_float_absolute_eq!(1.0, home_expectation, 1e-6);
    assert_float_absolute_eq!(0.5, away_expectation, 1e-6);
}
