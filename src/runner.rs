//! Script runner: the line loop around the interpreter
//!
//! Feeds each line of a command script through parsing and a [`Session`],
//! writing rendered results to the given writer. A bad line prints its
//! message and the run continues; only I/O failures propagate.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::commands::parse_line;
use crate::format::{render_event, OutputFormat};
use crate::session::{Event, Session};

/// Run a whole command script, writing output lines to `writer`
pub fn run_script<W: Write>(script: &str, format: OutputFormat, writer: &mut W) -> Result<()> {
    let mut session = Session::new();

    for (line_no, line) in script.lines().enumerate() {
        // Rejected lines become events too, so JSON mode stays one JSON
        // object per line
        let event = match parse_line(line) {
            Ok(Some(command)) => session.execute(command),
            Ok(None) => continue,
            Err(err) => {
                debug!(line_no, %err, "rejected input line");
                Event::Rejected {
                    message: err.to_string(),
                }
            }
        };

        if let Some(rendered) = render_event(&event, format) {
            writeln!(writer, "{}", rendered).context("failed to write output")?;
        }
    }

    Ok(())
}
