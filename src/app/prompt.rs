use std::io::{BufRead, ErrorKind, Write};

use anyhow::{Result, bail};
use lotto_combora::Selection;
use lotto_combora::panel::validate_numbers;
use lotto_combora::selection::QUICK_PICK_KEYWORD;

/// Where the selection for each panel comes from
pub trait SelectionSource {
    fn next_selection(&mut self, panel_index: usize) -> Result<Selection>;
}

/// Quick pick every panel
pub struct QuickPickAll;

impl SelectionSource for QuickPickAll {
    fn next_selection(&mut self, _panel_index: usize) -> Result<Selection> {
        Ok(Selection::QuickPick)
    }
}

/// Ask a player line by line, repeating the question until the answer is valid
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> SelectionSource for Prompt<R, W> {
    fn next_selection(&mut self, panel_index: usize) -> Result<Selection> {
        loop {
            writeln!(
                self.output,
                "Panel {} (Enter numbers separated by spaces or '{QUICK_PICK_KEYWORD}'): ",
                panel_index + 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => bail!("Input closed before panel {} was filled", panel_index + 1),
                Ok(_) => {}
                // the offending line is already consumed, ask again
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    log::debug!("Rejected input that is not UTF-8: {e}");
                    writeln!(self.output, "Invalid input. Numbers must be plain text.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }

            let checked = line.parse::<Selection>().and_then(|selection| {
                if let Selection::Numbers(numbers) = &selection {
                    validate_numbers(numbers)?;
                }
                Ok(selection)
            });
            match checked {
                Ok(selection) => {
                    log::debug!("Panel {} selection: {selection:?}", panel_index + 1);
                    return Ok(selection);
                }
                Err(e) => {
                    log::debug!("Rejected input {:?}: {e}", line.trim());
                    writeln!(self.output, "Invalid input. {e}.")?;
                }
            }
        }
    }
}
