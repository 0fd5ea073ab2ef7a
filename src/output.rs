//! Output formatting for statistics results.
//!
//! Supports debug logging and JSON written to any writer.

use anyhow::Result;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;
use tracing::debug;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty<T: Debug>(value: &T) {
    debug!("{:#?}", value);
}

/// Writes a value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
