pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::Roster;
pub use crate::core::cruise::{select_winner, select_winner_in, WinnerAnnouncement, WINNING_SUITE};
pub use crate::core::greeter::{greeting, happy_birthday, write_greetings};
pub use domain::model::{NameAgeMap, SuiteMap};
pub use utils::error::{PartyError, Result};
