//! JSON output for CLI commands
//!
//! Output is pretty-printed UTF-8 JSON on stdout, one document per command.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a value as pretty JSON to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    write_json_to(&mut stdout, value)
}

/// Write a value as pretty JSON to any writer
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
