//! Typed line readers with re-prompt-on-invalid semantics.
//!
//! A [`Prompter`] writes a prompt, reads one line, and either accepts it or
//! asks again. Invalid lines are retried indefinitely; end of input is the
//! only way out without a value and is reported as `Ok(None)`.
//!
//! When the caller gave no prompt, retries are announced with
//! [`DEFAULT_RETRY_PROMPT`] so the user sees that the line was rejected.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use crate::conversion::{parse_double, parse_float, parse_int, parse_long};
use crate::string::trim;

/// Shown before a retry when no prompt was supplied.
pub const DEFAULT_RETRY_PROMPT: &str = "Retry: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("empty range: min {min} is greater than max {max}")]
    EmptyRange { min: i32, max: i32 },
}

/// Line-oriented prompting reader over any buffered input and output.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
    retry_prompt: String,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    #[must_use]
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            retry_prompt: DEFAULT_RETRY_PROMPT.to_string(),
        }
    }

    /// Override the text shown before a retry when no prompt was supplied.
    #[must_use]
    pub fn with_retry_prompt(mut self, retry_prompt: impl Into<String>) -> Self {
        self.retry_prompt = retry_prompt.into();
        self
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Print `prompt` and read one raw line without its terminator.
    fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<Vec<u8>>> {
        if let Some(prompt) = prompt {
            self.writer.write_all(prompt.as_bytes())?;
            self.writer.flush()?;
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    /// Print `prompt` and read one line without its terminator.
    ///
    /// Returns `None` if input ends before any byte is read. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn get_string(&mut self, prompt: Option<&str>) -> Result<Option<String>, InputError> {
        Ok(self
            .read_line(prompt)?
            .map(|line| String::from_utf8_lossy(&line).into_owned()))
    }

    /// Read lines until `accept` yields a value or input ends.
    fn prompt_until<T>(
        &mut self,
        prompt: Option<&str>,
        mut accept: impl FnMut(&[u8]) -> Option<T>,
    ) -> Result<Option<T>, InputError> {
        let retry = self.retry_prompt.clone();
        let mut current = prompt;
        loop {
            let Some(line) = self.read_line(current)? else {
                return Ok(None);
            };
            if let Some(value) = accept(&line) {
                return Ok(Some(value));
            }
            if current.is_none() {
                current = Some(retry.as_str());
            }
        }
    }

    /// Read a line holding exactly one byte. A multi-byte UTF-8 character is
    /// rejected like any other over-long line.
    pub fn get_char(&mut self, prompt: Option<&str>) -> Result<Option<u8>, InputError> {
        self.prompt_until(prompt, |line| match line {
            [byte] => Some(*byte),
            _ => None,
        })
    }

    pub fn get_int(&mut self, prompt: Option<&str>) -> Result<Option<i32>, InputError> {
        self.prompt_until(prompt, |line| as_text(line).and_then(|t| parse_int(t).ok()))
    }

    pub fn get_long(&mut self, prompt: Option<&str>) -> Result<Option<i64>, InputError> {
        self.prompt_until(prompt, |line| as_text(line).and_then(|t| parse_long(t).ok()))
    }

    pub fn get_float(&mut self, prompt: Option<&str>) -> Result<Option<f32>, InputError> {
        self.prompt_until(prompt, |line| as_text(line).and_then(|t| parse_float(t).ok()))
    }

    pub fn get_double(&mut self, prompt: Option<&str>) -> Result<Option<f64>, InputError> {
        self.prompt_until(prompt, |line| as_text(line).and_then(|t| parse_double(t).ok()))
    }

    /// Read an `i32` in `min..=max`, re-prompting on anything else.
    pub fn get_int_range(
        &mut self,
        prompt: Option<&str>,
        min: i32,
        max: i32,
    ) -> Result<Option<i32>, InputError> {
        if min > max {
            return Err(InputError::EmptyRange { min, max });
        }
        self.prompt_until(prompt, |line| {
            as_text(line)
                .and_then(|t| parse_int(t).ok())
                .filter(|value| (min..=max).contains(value))
        })
    }

    /// Read a line containing at least one non-whitespace character.
    pub fn get_string_non_empty(
        &mut self,
        prompt: Option<&str>,
    ) -> Result<Option<String>, InputError> {
        self.prompt_until(prompt, |line| {
            let text = String::from_utf8_lossy(line);
            (!trim(&text).is_empty()).then(|| text.into_owned())
        })
    }
}

/// Numeric lines must be valid UTF-8; anything else is rejected.
fn as_text(line: &[u8]) -> Option<&str> {
    std::str::from_utf8(line).ok()
}
