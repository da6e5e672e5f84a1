//! Printer demonstration
//!
//! Walks through the three print operations of a printer seeded with 42.

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    basics::logging::init_from_env()?;

    let mut stdout = io::stdout().lock();
    basics::demos::printer::run(&mut stdout)?;
    Ok(())
}
