//! Cribbage scoring.
//!
//! - [`score_hand`] / [`score_crib`]: points for four cards plus the lead
//! - [`points_for_card`]: points for one play during pegging

mod peg;
mod points;

pub use peg::{
    peg_value, points_for_card, running_total, PegError, PeggedCard, MAX_PEGGED, PEG_LIMIT,
};
pub use points::{breakdown, score_crib, score_hand, Breakdown, Kind};
