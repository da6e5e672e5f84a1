//! Walkthrough of the printer's three print operations

use std::io::Write;

use tracing::info;

use crate::error::DemoResult;
use crate::printer::Printer;

/// Context value the walkthrough printer is seeded with.
const SEED_VALUE: i32 = 42;

/// Exercise each print operation once: string, integer, and two
/// boolean-pair calls covering an equal and an unequal pair.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    let mut printer = Printer::with_writer(SEED_VALUE, out);
    info!(value = printer.value(), "running printer demo");

    printer.print_str("foo bar")?;
    printer.print_int(SEED_VALUE)?;
    printer.print_bool_pair(true, true)?;
    printer.print_bool_pair(false, true)?;

    Ok(())
}
