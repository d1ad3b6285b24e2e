//! Line-oriented terminal prompts.
//!
//! Generic over the input/output streams so handlers can be driven from a
//! test buffer exactly like from stdin. Malformed numeric or enum input is
//! recovered here by re-prompting; it never escapes as an error. EOF on the
//! input aborts the sequence in progress.

use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::{AppError, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Prompter::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Read one trimmed line, showing `label` first. EOF aborts.
    pub fn line(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::Aborted);
        }
        Ok(buf.trim().to_string())
    }

    /// Read a number, re-prompting until the input parses.
    pub fn number(&mut self, label: &str) -> Result<f64> {
        loop {
            let raw = self.line(label)?;
            match raw.parse::<f64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Invalid input. Please enter a number.")?,
            }
        }
    }

    /// Read one of `valid`, case-insensitively, re-prompting until it
    /// matches.
    pub fn choice(&mut self, label: &str, valid: &[&str]) -> Result<String> {
        loop {
            let raw = self.line(label)?.to_lowercase();
            if valid.contains(&raw.as_str()) {
                return Ok(raw);
            }
            self.say(&format!(
                "Invalid input. Please enter one of: {}.",
                valid.join("/")
            ))?;
        }
    }

    /// "Press enter to continue" style pause. EOF is not an error here.
    pub fn pause(&mut self, message: &str) -> Result<()> {
        match self.line(message) {
            Ok(_) | Err(AppError::Aborted) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Consume the prompter and hand back the output stream, so tests can
    /// inspect the transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}
