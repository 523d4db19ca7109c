/*
 *   Copyright (c) 2025 termkit contributors
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::{fmt,
          io::{BufRead, Read, Write}};

use termkit_ansi_color::{Color, fprint, fprintf, fprintln};

use crate::{Prompt, PromptError};

/// Scratchpad for a single question. It remembers the first [PromptError] and turns
/// every later write or read into a no-op, so a question that breaks halfway produces no
/// further output and reports exactly that first error from [Transcript::finish].
///
/// A new one is made for each question, so a failure never leaks into the next one.
#[derive(Debug)]
pub struct Transcript<'a, R, W> {
    prompt: &'a mut Prompt<R, W>,
    error: Option<PromptError>,
}

impl<'a, R: Read, W: Write> Transcript<'a, R, W> {
    pub fn new(prompt: &'a mut Prompt<R, W>) -> Self {
        Self {
            prompt,
            error: None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&PromptError> { self.error.as_ref() }

    pub fn print(&mut self, fg: Color, text: &str) {
        if self.error.is_none() {
            let result = fprint(&mut self.prompt.output, fg, Color::DEFAULT, text);
            self.record_write(result);
        }
    }

    pub fn println(&mut self, fg: Color, text: &str) {
        if self.error.is_none() {
            let result = fprintln(&mut self.prompt.output, fg, Color::DEFAULT, text);
            self.record_write(result);
        }
    }

    pub fn printf(&mut self, fg: Color, args: fmt::Arguments<'_>) {
        if self.error.is_none() {
            let result = fprintf(&mut self.prompt.output, fg, Color::DEFAULT, args);
            self.record_write(result);
        }
    }

    /// Read one line, up to and including the delimiter, and return it without the
    /// delimiter. Returns an empty string once an error has been recorded, or when this
    /// read records one. A stream that ends before the delimiter is an error, the
    /// partial line is dropped. Bytes that aren't UTF-8 become `U+FFFD`.
    pub fn read(&mut self) -> String {
        if self.error.is_some() {
            return String::new();
        }

        // The question has no trailing newline, so a line buffered sink won't show it
        // until flushed.
        if let Err(err) = self.prompt.output.flush() {
            self.error = Some(PromptError::Write(err));
            return String::new();
        }

        let delimiter = self.prompt.delimiter;
        let mut acc = Vec::new();

        if let Err(err) = self.prompt.reader.read_until(delimiter, &mut acc) {
            self.error = Some(PromptError::Read(err));
            return String::new();
        }

        if acc.pop() != Some(delimiter) {
            self.error = Some(PromptError::UnexpectedEof {
                delimiter: char::from(delimiter),
            });
            return String::new();
        }

        let line = String::from_utf8_lossy(&acc).into_owned();
        tracing::trace!(line = %line, "read answer line");
        line
    }

    /// # Errors
    ///
    /// The first error recorded by a write or read, if any.
    pub fn finish<T>(self, value: T) -> Result<T, PromptError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }

    fn record_write(&mut self, result: std::io::Result<usize>) {
        if let Err(err) = result {
            self.error = Some(PromptError::Write(err));
        }
    }
}
