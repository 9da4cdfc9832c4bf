use crate::config::roster::Roster;
use crate::core::cruise::WINNING_SUITE;
use crate::utils::error::Result;
use crate::utils::validation::{validate_identifier, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "birthday-cruise")]
#[command(about = "Birthday greetings and the cruise suite draw")]
pub struct CliConfig {
    /// Roster file (.toml or .json); built-in fixtures are used when omitted
    #[arg(long, global = true)]
    pub roster: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a birthday greeting for every kid on the roster
    Greet,

    /// Print the passenger who wins the cruise draw
    Winner {
        /// Suite whose passenger wins
        #[arg(long, default_value = WINNING_SUITE)]
        suite: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliConfig {
    pub fn load_roster(&self) -> Result<Roster> {
        let roster = match &self.roster {
            Some(path) => Roster::from_file(path)?,
            None => {
                tracing::debug!("No roster file given, using built-in fixtures");
                Roster::fixtures()
            }
        };
        roster.validate()?;
        Ok(roster)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Command::Winner { suite, .. } = &self.command {
            validate_identifier("suite", suite)?;
        }
        Ok(())
    }
}
