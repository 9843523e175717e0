//! Line-oriented console for the game.
//!
//! Reads one command per line from any `BufRead` and writes narration to any
//! `Write`, so the whole loop can be exercised with in-memory buffers.

use detective_core::narrative;
use detective_core::{Accusation, GameSession, Transition};
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Play a session to the end.
///
/// Returns the accusation, or `None` if the player collected no clues or the
/// input ran out before a suspect was named.
pub fn run<R, W>(mut session: GameSession, mut input: R, mut output: W) -> io::Result<Option<Accusation>>
where
    R: BufRead,
    W: Write,
{
    write_lines(&mut output, narrative::banner(session.title()))?;
    write_lines(&mut output, narrative::notices_lines(session.opening()))?;

    loop {
        write!(output, "\nEscolha sua acao: ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            warn!(session = %session.id(), "input closed before the investigation ended");
            return Ok(None);
        };
        if line.trim().is_empty() {
            continue;
        }

        let step = session.command(&line);
        write_lines(&mut output, narrative::notices_lines(&step.notices))?;
        if step.transition == Transition::Ended {
            break;
        }
    }

    let report = session.final_report();
    write_lines(&mut output, narrative::report_lines(&report))?;
    if !report.has_evidence() {
        writeln!(output, "\n{}", narrative::farewell(session.title()))?;
        return Ok(None);
    }

    write_lines(&mut output, narrative::accusation_prompt(&session.suspects()))?;
    write!(output, "\nQuem voce acusa do crime? ")?;
    output.flush()?;
    let Some(accused) = read_line(&mut input)? else {
        warn!(session = %session.id(), "input closed before the accusation");
        return Ok(None);
    };

    let accusation = match session.accuse(&accused) {
        Ok(accusation) => accusation,
        Err(e) => {
            writeln!(output, "Erro: {e}")?;
            return Ok(None);
        }
    };
    write_lines(&mut output, narrative::verdict_lines(&accusation))?;
    writeln!(output, "\n{}", narrative::farewell(session.title()))?;
    output.flush()?;

    Ok(Some(accusation))
}

/// Read one line, keeping its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn write_lines<W: Write>(output: &mut W, lines: Vec<String>) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{line}")?;
    }
    Ok(())
}
