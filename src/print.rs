use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};

use crate::markets::Prediction;

pub fn tabulate_prediction(prediction: &Prediction) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(14)).with(Left)),
            Col::new(Styles::default().with(MinWidth(11)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec!["Market".into(), "Probability".into(), "Fair price".into()],
        ));
    for (market, prob) in [
        ("Home win", prediction.home),
        ("Draw", prediction.draw),
        ("Away win", prediction.away),
        ("Over", prediction.over),
        ("Under", prediction.under),
        ("BTTS yes", prediction.btts_yes),
        ("BTTS no", prediction.btts_no),
        ("Home DNB", prediction.home_dnb),
        ("Away DNB", prediction.away_dnb),
        ("1X", prediction.home_or_draw),
        ("12", prediction.home_or_away),
        ("X2", prediction.draw_or_away),
    ] {
        let fair_price = if prob > 0.0 {
            format!("{:.2}", 1.0 / prob)
        } else {
            "-".into()
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                market.into(),
                format!("{prob:.3}").into(),
                fair_price.into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::matrix::Matrix;
    use crate::rates::Lambdas;
    use crate::scoregrid;

    #[test]
    fn tabulates_every_market() {
        let lambdas = Lambdas {
            home: 1.5,
            away: 1.1,
            dc_rho: 0.0,
        };
        let mut grid = Matrix::allocate(11, 11);
        scoregrid::from_independent_poisson(lambdas.home, lambdas.away, &mut grid);
        let prediction = Prediction::from_scoregrid(&grid, 2.5, &lambdas);
        let table = tabulate_prediction(&prediction);
        // header plus the twelve market rows
        assert_eq!(13, table.num_rows());
    }
}
