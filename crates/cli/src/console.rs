//! Line-oriented console I/O.
//!
//! Every prompt reads one whole line and trims it. End of input is reported as
//! `None` so callers can wind down cleanly instead of looping on an empty
//! stream.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use partshop_core::Price;

/// A prompt/response console over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Show `prompt` and read one trimmed line, or `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Like [`prompt`](Self::prompt) but re-asks until the answer is non-empty.
    pub fn prompt_required(&mut self, prompt: &str, what: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(prompt)? {
                None => return Ok(None),
                Some(answer) if answer.is_empty() => {
                    self.say(format_args!("{what} cannot be empty."))?;
                }
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Read a non-negative whole number, re-asking on malformed input.
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u32>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => {
                    self.say(format_args!("'{answer}' is not a number, please try again."))?;
                }
            }
        }
    }

    /// Read a price, re-asking on malformed input.
    pub fn prompt_price(&mut self, prompt: &str) -> io::Result<Option<Price>> {
        loop {
            let Some(answer) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match Price::parse(&answer) {
                Ok(price) => return Ok(Some(price)),
                Err(e) => self.say(format_args!("Invalid price: {e}"))?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
