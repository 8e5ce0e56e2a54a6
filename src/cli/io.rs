//! JSON output for CLI commands
//!
//! One JSON object per line on stdout, UTF-8.

use std::io::{self, Write};

use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&mut io::stdout(), &serde_json::json!({"status": "ok", "data": data}))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(
        &mut io::stdout(),
        &serde_json::json!({"status": "error", "code": code, "message": message}),
    )
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
