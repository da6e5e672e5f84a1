//! Fibonacci sequence demonstration
//!
//! Prints the first ten Fibonacci numbers, computed by naive recursion,
//! through a printer seeded with 0.

use std::io;

use anyhow::Result;

fn main() -> Result<()> {
    basics::logging::init_from_env()?;

    let mut stdout = io::stdout().lock();
    basics::demos::fibonacci::run(&mut stdout)?;
    Ok(())
}
