//! The read-eval-print loop.

use std::io::{self, BufRead, Write};

use tracing::debug;
use wd_game::menu::{COMMANDS, PROMPT, WELCOME, reminder};
use wd_game::{Response, Session};

/// Play until `quit` or end of input.
///
/// Before each prompt the command list is printed; after each non-empty
/// command, its output (or error message) followed by the case-file reminder.
/// `quit` gets the reminder too, ahead of the farewell line.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{WELCOME}")?;
    match session.look_around() {
        Ok(text) => writeln!(out, "{text}")?,
        Err(e) => writeln!(out, "{e}")?,
    }

    let mut lines = input.lines();
    loop {
        writeln!(out, "{COMMANDS}")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            debug!("end of input");
            return Ok(());
        };
        let line = line?;

        match session.process(&line) {
            Ok(Response::Silent) => continue,
            Ok(Response::Farewell(text)) => {
                writeln!(out, "{}", reminder(session.case_file()))?;
                writeln!(out, "{text}")?;
                return Ok(());
            }
            Ok(Response::Text(text)) => writeln!(out, "{text}")?,
            Err(e) => {
                debug!(error = ?e, input = %line, "command rejected");
                writeln!(out, "{e}")?;
            }
        }

        writeln!(out, "{}", reminder(session.case_file()))?;
    }
}
