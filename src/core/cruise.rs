use crate::domain::model::SuiteMap;
use crate::utils::error::{PartyError, Result};
use serde::Serialize;

/// The suite whose passenger wins the cruise draw.
pub const WINNING_SUITE: &str = "suite_a";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinnerAnnouncement<'a> {
    pub suite: &'a str,
    pub winner: &'a str,
}

pub fn select_winner(passengers: &SuiteMap) -> Result<&str> {
    select_winner_in(passengers, WINNING_SUITE)
}

/// Looks up the passenger booked in `suite`. Exact key match only.
pub fn select_winner_in<'a>(passengers: &'a SuiteMap, suite: &str) -> Result<&'a str> {
    let winner = passengers
        .get(suite)
        .ok_or_else(|| PartyError::SuiteNotFound {
            suite: suite.to_string(),
        })?;
    tracing::debug!("Suite {} belongs to {}", suite, winner);
    Ok(winner)
}
