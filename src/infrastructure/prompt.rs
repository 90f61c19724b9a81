//! Selection prompts
//!
//! `TerminalPrompt` drives a dialoguer input on a real terminal.
//! `LinePrompt` reads plain lines from any reader, for piped stdin and tests.

use std::io::{BufRead, Write};

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::domain::entities::IdentifiedImage;
use crate::domain::ports::{candidate_lines, parse_selection, SelectionChoice, SelectionPrompt};
use crate::error::{RomexError, RomexResult};

fn heading(count: usize, allow_all: bool) -> String {
    if allow_all {
        format!(
            "{} ROMs found, please select one or all by entering 'a'",
            count
        )
    } else {
        format!("{} ROMs found, please select one", count)
    }
}

/// Line-oriented prompt over arbitrary input/output streams.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
    verbose: bool,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> SelectionPrompt for LinePrompt<R, W> {
    fn choose(
        &mut self,
        candidates: &[IdentifiedImage],
        allow_all: bool,
    ) -> RomexResult<SelectionChoice> {
        writeln!(self.output, "{}\n", heading(candidates.len(), allow_all))?;
        for line in candidate_lines(candidates, self.verbose) {
            writeln!(self.output, "{}", line)?;
        }

        loop {
            write!(self.output, "\nEnter selection: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(RomexError::SelectionAborted);
            }
            if let Some(choice) = parse_selection(&line, candidates.len(), allow_all) {
                return Ok(choice);
            }
            writeln!(self.output, "Invalid selection '{}'", line.trim())?;
        }
    }
}

/// Dialoguer-backed prompt for interactive terminals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    verbose: bool,
}

impl TerminalPrompt {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl SelectionPrompt for TerminalPrompt {
    fn choose(
        &mut self,
        candidates: &[IdentifiedImage],
        allow_all: bool,
    ) -> RomexResult<SelectionChoice> {
        eprintln!("{}\n", heading(candidates.len(), allow_all));
        for line in candidate_lines(candidates, self.verbose) {
            eprintln!("{}", line);
        }
        eprintln!();

        let count = candidates.len();
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter selection")
            .validate_with(|input: &String| -> Result<(), String> {
                match parse_selection(input, count, allow_all) {
                    Some(_) => Ok(()),
                    None if allow_all => Err(format!("enter a number from 1 to {} or 'a'", count)),
                    None => Err(format!("enter a number from 1 to {}", count)),
                }
            })
            .interact_text()
            .map_err(|_| RomexError::SelectionAborted)?;

        parse_selection(&answer, count, allow_all).ok_or(RomexError::SelectionAborted)
    }
}
