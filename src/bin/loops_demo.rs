//! Loop form demonstration
//!
//! Prints counting sequences using ascending and descending bounded loops
//! and two condition-driven loops.

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    basics::logging::init_from_env()?;

    let mut stdout = io::stdout().lock();
    basics::demos::loops::run(&mut stdout)?;
    Ok(())
}
