use crate::domain::model::NameAgeMap;
use crate::utils::error::Result;
use std::io::{self, Write};

pub fn greeting(name: &str, age: u32) -> String {
    format!("Happy Birthday {}! You are now {} years old!", name, age)
}

/// Writes one greeting line per kid, in map order.
pub fn write_greetings<W: Write>(kids: &NameAgeMap, out: &mut W) -> Result<()> {
    for (name, age) in kids.iter() {
        writeln!(out, "{}", greeting(name, age))?;
    }
    tracing::debug!("Greeted {} birthday kids", kids.len());
    Ok(())
}

/// Prints every greeting to stdout.
pub fn happy_birthday(kids: &NameAgeMap) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_greetings(kids, &mut handle)?;
    handle.flush()?;
    Ok(())
}
