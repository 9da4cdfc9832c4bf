use anyhow::Context;
use birthday_cruise::utils::{logger, validation::Validate};
use birthday_cruise::{
    happy_birthday, select_winner_in, CliConfig, Command, PartyError, WinnerAnnouncement,
};
use clap::Parser;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting birthday-cruise");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let roster = match config.load_roster() {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("❌ Failed to load roster: {}", e);
            exit_with(&e);
        }
    };

    match &config.command {
        Command::Greet => {
            happy_birthday(&roster.birthday_kids).context("failed to print greetings")?;
        }
        Command::Winner { suite, json } => {
            let winner = match select_winner_in(&roster.passengers, suite) {
                Ok(winner) => winner,
                Err(e) => {
                    tracing::error!("❌ Winner selection failed: {}", e);
                    exit_with(&e);
                }
            };
            tracing::info!("🎉 Suite {} wins", suite);

            let line = if *json {
                let announcement = WinnerAnnouncement { suite, winner };
                serde_json::to_string(&announcement).context("failed to encode winner")?
            } else {
                winner.to_string()
            };

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", line).context("failed to print winner")?;
            stdout.flush().context("failed to print winner")?;
        }
    }

    Ok(())
}

fn exit_with(e: &PartyError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
