//! The command loop: read lines, execute them, report.
//!
//! Generic over its streams so scripts, stdin and tests all go through the
//! same path. A rejected command is reported and the loop moves on.

use std::io::{self, BufRead, Write};

use crate::config::ShellConfig;
use crate::session::{Outcome, Session};

/// Counts for one run of the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub failed: usize,
}

pub fn run<R, W, E>(
    session: &mut Session,
    config: &ShellConfig,
    input: R,
    out: &mut W,
    err: &mut E,
) -> io::Result<Summary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();
    let mut lines = input.lines().enumerate();

    loop {
        if let Some(prompt) = &config.prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let Some((index, line)) = lines.next() else {
            // Close the pending prompt line at end of input.
            if config.prompt.is_some() {
                writeln!(out)?;
            }
            break;
        };
        let line = line?;

        match session.execute(&line) {
            Ok(Outcome::Nothing) => continue,
            Ok(Outcome::Quit) => {
                summary.executed += 1;
                break;
            }
            Ok(Outcome::Rendered(text)) => {
                summary.executed += 1;
                if config.echo {
                    writeln!(out, "{text}")?;
                }
            }
            Ok(Outcome::Output(text)) => {
                summary.executed += 1;
                writeln!(out, "{text}")?;
            }
            Err(e) => {
                summary.failed += 1;
                tracing::debug!(line = index + 1, %e, "command rejected");
                writeln!(err, "error: {e}")?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
