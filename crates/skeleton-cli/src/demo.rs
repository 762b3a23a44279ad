//! The entry-point sequence: greet, add, print.

use std::io::Write;

use skeleton_core::Library;
use tracing::{info, instrument};

use crate::error::{CliResult, IntoCli};

const LHS: i32 = 5;
const RHS: i32 = 3;

/// Run the fixed sequence against `out`.
///
/// Writes the greeting line, then `5 + 3 = 8`. Nothing else reaches `out`.
#[instrument(skip_all)]
pub fn execute<W: Write>(lib: Library, out: &mut W) -> CliResult<()> {
    lib.hello_to(&mut *out)
        .with_cli_context(|| "failed to write greeting")?;

    let sum = lib.add(LHS, RHS);
    info!(lhs = LHS, rhs = RHS, sum, "computed sum");

    writeln!(out, "{LHS} + {RHS} = {sum}")
        .and_then(|()| out.flush())
        .with_cli_context(|| "failed to write sum")?;

    Ok(())
}
