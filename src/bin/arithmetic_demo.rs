//! Arithmetic demonstration
//!
//! Runs one of each calculator operation over literal operands and prints
//! the results through a printer seeded with 42.

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    basics::logging::init_from_env()?;

    let mut stdout = io::stdout().lock();
    basics::demos::arithmetic::run(&mut stdout)?;
    Ok(())
}
