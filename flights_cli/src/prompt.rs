use crate::error::CliError;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Asks for missing parameters on an interactive line-based stream.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `value` when given, otherwise prompts until the answer parses.
    pub fn or_ask<T>(&mut self, value: Option<T>, question: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        match value {
            Some(value) => Ok(value),
            None => self.ask(question),
        }
    }

    pub fn ask<T>(&mut self, question: &str) -> Result<T, CliError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(CliError::InputClosed(question.to_string()));
            }

            let answer = line.trim();
            if answer.is_empty() {
                continue;
            }
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => writeln!(self.output, "Invalid value {answer:?}: {e}")?,
            }
        }
    }
}
