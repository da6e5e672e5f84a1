//! Integer arithmetic routed through a printer

use std::io::Write;

use tracing::info;

use crate::calculator::Calculator;
use crate::error::DemoResult;
use crate::printer::Printer;

/// Fixed string printed ahead of the arithmetic results.
pub const STRING_CONSTANT: &str = "foo bar";

/// Context value for the demo's printer.
const SEED_VALUE: i32 = 42;

/// Run one of each arithmetic operation over literal operands, printing
/// every result, then finish with two boolean-pair calls.
///
/// All literal divisors are non-zero, so the fallible `div` and `rem`
/// calls cannot fail here; the `?` exists because a zero divisor is a
/// defined error of the calculator, not undefined behavior.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    info!("running arithmetic demo");

    let mut printer = Printer::with_writer(SEED_VALUE, out);
    let calculator = Calculator::new();

    printer.print_str(STRING_CONSTANT)?;
    printer.print_int(calculator.add(21, 33))?;
    printer.print_int(calculator.sub(44, 33))?;
    printer.print_int(calculator.mul(3, 3))?;
    printer.print_int(calculator.div(9, 3)?)?;
    printer.print_int(calculator.rem(8, 3)?)?;
    printer.print_bool_pair(true, true)?;
    printer.print_bool_pair(false, true)?;

    Ok(())
}
