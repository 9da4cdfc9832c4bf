use anyhow::Result;
use birthday_cruise::utils::validation::Validate;
use birthday_cruise::{select_winner, PartyError, Roster, SuiteMap};
use std::io::Write;
use tempfile::Builder;

fn passengers() -> SuiteMap {
    [
        ("suite_a", "Amanda Presley"),
        ("suite_b", "Seymour Hoffman"),
        ("suite_c", "Alfred Tennyson"),
        ("suite_d", "Charlie Chaplin"),
        ("suite_e", "Crumpet the Elf"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_returns_the_passenger_in_suite_a() -> Result<()> {
    assert_eq!(select_winner(&passengers())?, "Amanda Presley");
    Ok(())
}

#[test]
fn test_selecting_twice_gives_the_same_winner() -> Result<()> {
    let passengers = passengers();

    let first = select_winner(&passengers)?.to_string();
    let second = select_winner(&passengers)?.to_string();

    assert_eq!(first, second);
    assert_eq!(passengers.len(), 5);
    Ok(())
}

#[test]
fn test_other_a_names_do_not_win() -> Result<()> {
    // Alfred Tennyson also starts with 'A' but is not in suite_a.
    let passengers: SuiteMap = [("suite_c", "Alfred Tennyson"), ("suite_a", "Seymour Hoffman")]
        .into_iter()
        .collect();

    assert_eq!(select_winner(&passengers)?, "Seymour Hoffman");
    Ok(())
}

#[test]
fn test_missing_suite_a_is_an_error() {
    let passengers: SuiteMap = [("suite_b", "Seymour Hoffman")].into_iter().collect();

    let err = select_winner(&passengers).unwrap_err();
    assert!(matches!(err, PartyError::SuiteNotFound { ref suite } if suite == "suite_a"));
}

#[test]
fn test_selects_winner_from_toml_roster() -> Result<()> {
    let mut roster_file = Builder::new().suffix(".toml").tempfile()?;
    roster_file.write_all(
        br#"
[[passengers]]
suite = "suite_b"
passenger = "Seymour Hoffman"

[[passengers]]
suite = "suite_a"
passenger = "Crumpet the Elf"
"#,
    )?;

    let roster = Roster::from_file(roster_file.path())?;
    roster.validate()?;

    assert_eq!(select_winner(&roster.passengers)?, "Crumpet the Elf");
    Ok(())
}
