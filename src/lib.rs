//! A Poisson model of football match outcomes. Derives the joint score distribution for a
//! fixture from team strength ratings and league-level parameters, then reduces it into
//! probabilities for the common betting markets: match result, totals, both-teams-to-score,
//! draw-no-bet and double chance.

pub mod data;
pub mod factorial;
pub mod linear;
pub mod markets;
pub mod model;
pub mod poisson;
pub mod print;
pub mod probs;
pub mod rates;
pub mod scoregrid;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
