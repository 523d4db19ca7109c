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

use std::io::{BufReader, Read, Write};

use ordermap::OrderMap;
use termkit_ansi_color::Color;

use crate::{CHOICE_SEPARATOR,
            CLOSE_PAREN,
            DEFAULT_DELIMITER,
            NO_MARK,
            OPEN_PAREN,
            PLAIN_COLOR,
            PROMPT_COLON,
            PromptError,
            SELECT_HINT,
            Transcript,
            YES_MARK};

/// Asks questions on an output sink and reads the answers, one line each, from an input
/// stream. Defaults are shown in the `highlight` color and are used when the answer is
/// an empty line.
///
/// Every `ask_*` method writes the question, then blocks until one line (terminated by
/// the delimiter) has been read. Nothing is retried: the first I/O failure during a
/// question is what that question returns. Not meant to be shared between threads, the
/// input stream's position is plain mutable state.
///
/// ```rust
/// use termkit_ansi_color::Color;
/// use termkit_prompt::Prompt;
///
/// let input = "\nn\n".as_bytes();
/// let mut prompt = Prompt::new(b'\n', input, std::io::sink(), Color::GREEN);
///
/// assert_eq!(prompt.ask_string("Name", "anonymous").unwrap(), "anonymous");
/// assert_eq!(prompt.ask_bool("Continue?", true).unwrap(), false);
/// ```
#[derive(Debug)]
pub struct Prompt<R, W> {
    pub(crate) reader: BufReader<R>,
    pub(crate) output: W,
    pub(crate) delimiter: u8,
    pub(crate) highlight: Color,
}

impl<R: Read, W: Write> Prompt<R, W> {
    /// - `delimiter` ends each answer. Pass `0` to use `\n`.
    /// - `highlight` is used to render default values.
    ///
    /// # Panics
    ///
    /// If `highlight` is not a valid [Color]. This is a programming error, not something
    /// to recover from at runtime.
    pub fn new(delimiter: u8, input: R, output: W, highlight: Color) -> Self {
        assert!(
            highlight.is_valid(),
            "invalid highlight color: {highlight}"
        );

        let delimiter = if delimiter == 0 {
            DEFAULT_DELIMITER
        } else {
            delimiter
        };

        Self {
            reader: BufReader::new(input),
            output,
            delimiter,
            highlight,
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> u8 { self.delimiter }

    #[must_use]
    pub fn highlight(&self) -> Color { self.highlight }

    pub fn output(&self) -> &W { &self.output }

    pub fn into_output(self) -> W { self.output }

    /// Ask for free text. An empty answer gives back `default`. The answer is returned
    /// as typed, without the delimiter, and is not trimmed.
    ///
    /// # Errors
    ///
    /// The first I/O error while writing the question or reading the answer.
    pub fn ask_string(
        &mut self,
        question: &str,
        default: &str,
    ) -> Result<String, PromptError> {
        tracing::debug!(question, default, "ask string");
        let highlight = self.highlight;
        let mut transcript = Transcript::new(self);

        transcript.print(PLAIN_COLOR, question);
        if !default.is_empty() {
            transcript.print(highlight, &format!("{OPEN_PAREN}{default}{CLOSE_PAREN}"));
        }
        transcript.print(PLAIN_COLOR, PROMPT_COLON);

        let answer = transcript.read();
        let answer = transcript.finish(answer)?;

        if answer.is_empty() {
            tracing::debug!(question, "empty answer, using default");
            return Ok(default.to_string());
        }
        Ok(answer)
    }

    /// Ask a yes/no question. `yes`/`y` and `no`/`n` are accepted in any case; anything
    /// else, including an empty answer, gives back `default`.
    ///
    /// # Errors
    ///
    /// The first I/O error while writing the question or reading the answer.
    pub fn ask_bool(
        &mut self,
        question: &str,
        default: bool,
    ) -> Result<bool, PromptError> {
        tracing::debug!(question, default, "ask bool");
        let highlight = self.highlight;
        let mut transcript = Transcript::new(self);

        let mark = if default { YES_MARK } else { NO_MARK };
        transcript.print(PLAIN_COLOR, question);
        transcript.print(highlight, &format!("{OPEN_PAREN}{mark}{CLOSE_PAREN}"));
        transcript.print(PLAIN_COLOR, PROMPT_COLON);

        let answer = transcript.read();
        let answer = transcript.finish(answer)?;

        match parse_yes_no(&answer) {
            Some(it) => Ok(it),
            None => {
                tracing::debug!(
                    question,
                    answer = %answer,
                    "not a yes/no answer, using default"
                );
                Ok(default)
            }
        }
    }

    /// Show `options` numbered from zero and ask for one or more of them, separated by
    /// commas. An empty answer gives back `defaults` unchanged. Indices in `defaults` are
    /// shown in the highlight color. The answer is not checked against the number of
    /// options.
    ///
    /// # Errors
    ///
    /// - The first I/O error while writing the question or reading the answer.
    /// - [PromptError::InvalidIndex] for the first token that isn't an integer. Negative
    ///   numbers are integers too. No partial list is returned.
    pub fn ask_indices<S: AsRef<str>>(
        &mut self,
        question: &str,
        options: &[S],
        defaults: &[isize],
    ) -> Result<Vec<isize>, PromptError> {
        tracing::debug!(question, ?defaults, count = options.len(), "ask indices");
        let highlight = self.highlight;
        let mut transcript = Transcript::new(self);

        transcript.println(PLAIN_COLOR, question);
        for (index, option) in (0_isize..).zip(options) {
            let color = if defaults.contains(&index) {
                highlight
            } else {
                PLAIN_COLOR
            };
            transcript.printf(color, format_args!("{OPEN_PAREN}{index}{CLOSE_PAREN}"));
            transcript.printf(PLAIN_COLOR, format_args!("{}\n", option.as_ref()));
        }
        transcript.print(PLAIN_COLOR, &format!("{SELECT_HINT}{PROMPT_COLON}"));

        let answer = transcript.read();
        let answer = transcript.finish(answer)?;

        if answer.is_empty() {
            tracing::debug!(question, "empty answer, using defaults");
            return Ok(defaults.to_vec());
        }
        parse_indices(&answer)
    }

    /// Show each key/value pair of `options`, in insertion order, and ask for one or more
    /// keys, separated by commas. An empty answer gives back `defaults` unchanged. Keys
    /// in `defaults` are shown in the highlight color. The tokens are returned as typed,
    /// without checking them against the keys of `options`.
    ///
    /// # Errors
    ///
    /// The first I/O error while writing the question or reading the answer.
    pub fn ask_keys(
        &mut self,
        question: &str,
        options: &OrderMap<String, String>,
        defaults: &[String],
    ) -> Result<Vec<String>, PromptError> {
        tracing::debug!(question, ?defaults, count = options.len(), "ask keys");
        let highlight = self.highlight;
        let mut transcript = Transcript::new(self);

        transcript.println(PLAIN_COLOR, question);
        for (key, value) in options {
            let color = if defaults.contains(key) {
                highlight
            } else {
                PLAIN_COLOR
            };
            transcript.printf(color, format_args!("{OPEN_PAREN}{key}{CLOSE_PAREN}"));
            transcript.printf(PLAIN_COLOR, format_args!("{value}\n"));
        }
        transcript.print(PLAIN_COLOR, &format!("{SELECT_HINT}{PROMPT_COLON}"));

        let answer = transcript.read();
        let answer = transcript.finish(answer)?;

        if answer.is_empty() {
            tracing::debug!(question, "empty answer, using defaults");
            return Ok(defaults.to_vec());
        }
        Ok(answer.split(CHOICE_SEPARATOR).map(str::to_string).collect())
    }
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_indices(answer: &str) -> Result<Vec<isize>, PromptError> {
    answer
        .split(CHOICE_SEPARATOR)
        .map(|token| {
            token
                .parse::<isize>()
                .map_err(|source| PromptError::InvalidIndex {
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use pretty_assertions::assert_eq;
    use termkit_ansi_color::{ColoredText, RESET};
    use termkit_test_fixtures::{FailingWriter, OutputMock, ScriptedReader};
    use test_case::test_case;

    use super::*;

    fn prompt_with(input: &str) -> (Prompt<Cursor<Vec<u8>>, OutputMock>, OutputMock) {
        let output = OutputMock::new();
        let input = Cursor::new(input.as_bytes().to_vec());
        let prompt = Prompt::new(0, input, output.clone(), Color::RED);
        (prompt, output)
    }

    #[test]
    fn new_defaults_the_delimiter() {
        let prompt = Prompt::new(0, "".as_bytes(), std::io::sink(), Color::RED);
        assert_eq!(prompt.delimiter(), b'\n');
        assert_eq!(prompt.highlight(), Color::RED);

        let prompt = Prompt::new(b'x', "".as_bytes(), std::io::sink(), Color::RED);
        assert_eq!(prompt.delimiter(), b'x');
    }

    #[test]
    fn new_accepts_palette_colors() {
        let prompt =
            Prompt::new(0, "".as_bytes(), std::io::sink(), Color::ansi256(208));
        assert_eq!(prompt.highlight(), Color::ansi256(208));
    }

    #[test]
    #[should_panic(expected = "invalid highlight color")]
    fn new_rejects_invalid_color() {
        let _ = Prompt::new(0, "".as_bytes(), std::io::sink(), Color::from_raw(123));
    }

    #[test]
    fn ask_string_uses_the_answer() {
        let (mut prompt, output) = prompt_with("  two  words \n");
        let answer = prompt.ask_string("Name", "anon").unwrap();
        assert_eq!(answer, "  two  words ");
        assert_eq!(
            output.get_copy_of_buffer_as_string_strip_ansi(),
            "Name（anon）："
        );
    }

    #[test]
    fn ask_string_falls_back_to_default() {
        let (mut prompt, _) = prompt_with("\n");
        assert_eq!(prompt.ask_string("Name", "anon").unwrap(), "anon");
    }

    #[test]
    fn ask_string_without_default() {
        let (mut prompt, output) = prompt_with("\n");
        assert_eq!(prompt.ask_string("Name", "").unwrap(), "");
        assert_eq!(output.get_copy_of_buffer_as_string_strip_ansi(), "Name：");
    }

    #[test]
    fn ask_string_highlights_the_default() {
        let (mut prompt, output) = prompt_with("\n");
        prompt.ask_string("Name", "anon").unwrap();
        let highlighted = ColoredText::new("（anon）", Color::RED, Color::DEFAULT);
        let raw = output.get_copy_of_buffer_as_string();
        assert!(raw.contains(&highlighted.to_string()), "{raw:?}");
        assert!(raw.ends_with(RESET));
    }

    #[test]
    fn ask_string_reports_eof() {
        let (mut prompt, _) = prompt_with("no newline");
        let err = prompt.ask_string("Name", "anon").unwrap_err();
        assert!(matches!(err, PromptError::UnexpectedEof { .. }));
    }

    #[test_case("Y", true; "upper y")]
    #[test_case("y", true; "lower y")]
    #[test_case("YES", true; "upper yes")]
    #[test_case("yes", true; "lower yes")]
    #[test_case("N", false; "upper n")]
    #[test_case("n", false; "lower n")]
    #[test_case("no", false; "lower no")]
    #[test_case("No", false; "mixed no")]
    fn ask_bool_recognized(input: &str, expected: bool) {
        for default in [true, false] {
            let (mut prompt, _) = prompt_with(&format!("{input}\n"));
            assert_eq!(prompt.ask_bool("Ok?", default).unwrap(), expected);
        }
    }

    #[test_case(""; "empty")]
    #[test_case("maybe"; "unrecognized")]
    #[test_case(" y"; "leading space")]
    fn ask_bool_falls_back_to_default(input: &str) {
        for default in [true, false] {
            let (mut prompt, _) = prompt_with(&format!("{input}\n"));
            assert_eq!(prompt.ask_bool("Ok?", default).unwrap(), default);
        }
    }

    #[test]
    fn non_utf8_answers_are_not_errors() {
        let input = Cursor::new(vec![0xff, b'\n', b'a', 0xfe, b'\n']);
        let mut prompt = Prompt::new(0, input, std::io::sink(), Color::RED);

        assert!(prompt.ask_bool("Ok?", true).unwrap());
        assert_eq!(prompt.ask_string("Name", "anon").unwrap(), "a\u{FFFD}");
    }

    #[test]
    fn ask_bool_shows_the_default_mark() {
        let (mut prompt, output) = prompt_with("\n");
        prompt.ask_bool("Ok?", true).unwrap();
        assert_eq!(
            output.get_copy_of_buffer_as_string_strip_ansi(),
            "Ok?（Y）："
        );

        let (mut prompt, output) = prompt_with("\n");
        prompt.ask_bool("Ok?", false).unwrap();
        assert_eq!(
            output.get_copy_of_buffer_as_string_strip_ansi(),
            "Ok?（N）："
        );
    }

    #[test]
    fn ask_bool_reports_read_failure() {
        let input = ScriptedReader::data_then_fail("ye", ErrorKind::TimedOut);
        let mut prompt = Prompt::new(0, input, std::io::sink(), Color::RED);
        let err = prompt.ask_bool("Ok?", true).unwrap_err();
        assert!(matches!(err, PromptError::Read(it) if it.kind() == ErrorKind::TimedOut));
    }

    #[test]
    fn ask_indices_lists_options() {
        let (mut prompt, output) = prompt_with("\n");
        prompt.ask_indices("Pick", &["a", "b", "c"], &[1]).unwrap();
        assert_eq!(
            output.get_copy_of_buffer_as_string_strip_ansi(),
            format!("Pick\n（0）a\n（1）b\n（2）c\n{SELECT_HINT}：")
        );

        let highlighted = ColoredText::new("（1）", Color::RED, Color::DEFAULT);
        let plain = ColoredText::new("（0）", Color::DEFAULT, Color::DEFAULT);
        let raw = output.get_copy_of_buffer_as_string();
        assert!(raw.contains(&highlighted.to_string()));
        assert!(raw.contains(&plain.to_string()));
    }

    #[test]
    fn ask_indices_empty_answer_gives_defaults() {
        let (mut prompt, _) = prompt_with("\n");
        let answer = prompt.ask_indices("Pick", &["a", "b"], &[1, 0]).unwrap();
        assert_eq!(answer, vec![1, 0]);

        let (mut prompt, _) = prompt_with("\n");
        let answer = prompt.ask_indices("Pick", &["a", "b"], &[]).unwrap();
        assert_eq!(answer, Vec::<isize>::new());
    }

    #[test]
    fn ask_indices_parses_the_answer() {
        let (mut prompt, _) = prompt_with("1,3\n");
        let answer = prompt.ask_indices("Pick", &["a", "b"], &[0]).unwrap();
        assert_eq!(answer, vec![1, 3]);
    }

    #[test_case("1,x", "x"; "second token")]
    #[test_case("x", "x"; "only token")]
    #[test_case("1, 2", " 2"; "space is not trimmed")]
    #[test_case("1,,2", ""; "empty token")]
    #[test_case("+", "+"; "sign without digits")]
    fn ask_indices_rejects_bad_tokens(input: &str, bad_token: &str) {
        let (mut prompt, _) = prompt_with(&format!("{input}\n"));
        let err = prompt.ask_indices("Pick", &["a", "b"], &[0]).unwrap_err();
        match err {
            PromptError::InvalidIndex { token, .. } => assert_eq!(token, bad_token),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ask_indices_accepts_negative_numbers() {
        let (mut prompt, _) = prompt_with("-1,2\n");
        let answer = prompt.ask_indices("Pick", &["a", "b"], &[0]).unwrap();
        assert_eq!(answer, vec![-1, 2]);
    }

    #[test]
    fn ask_indices_negative_default_highlights_nothing() {
        let (mut prompt, output) = prompt_with("\n");
        let answer = prompt.ask_indices("Pick", &["a"], &[-1]).unwrap();
        assert_eq!(answer, vec![-1]);
        let plain = ColoredText::new("（0）", Color::DEFAULT, Color::DEFAULT);
        assert!(output.get_copy_of_buffer_as_string().contains(&plain.to_string()));
    }

    fn fruits() -> OrderMap<String, String> {
        let mut it = OrderMap::new();
        it.insert("a".to_string(), "apple".to_string());
        it.insert("b".to_string(), "banana".to_string());
        it.insert("c".to_string(), "cherry".to_string());
        it
    }

    #[test]
    fn ask_keys_lists_options_in_insertion_order() {
        let (mut prompt, output) = prompt_with("\n");
        prompt.ask_keys("Fruit", &fruits(), &["b".to_string()]).unwrap();
        assert_eq!(
            output.get_copy_of_buffer_as_string_strip_ansi(),
            format!("Fruit\n（a）apple\n（b）banana\n（c）cherry\n{SELECT_HINT}：")
        );

        let highlighted = ColoredText::new("（b）", Color::RED, Color::DEFAULT);
        assert!(
            output
                .get_copy_of_buffer_as_string()
                .contains(&highlighted.to_string())
        );
    }

    #[test]
    fn ask_keys_empty_answer_gives_defaults() {
        let (mut prompt, _) = prompt_with("\n");
        let defaults = vec!["c".to_string(), "a".to_string()];
        assert_eq!(prompt.ask_keys("Fruit", &fruits(), &defaults).unwrap(), defaults);
    }

    #[test]
    fn ask_keys_returns_raw_tokens() {
        let (mut prompt, _) = prompt_with("a,zzz, c\n");
        assert_eq!(
            prompt.ask_keys("Fruit", &fruits(), &[]).unwrap(),
            vec!["a".to_string(), "zzz".to_string(), " c".to_string()]
        );
    }

    #[test]
    fn write_failure_skips_the_read() {
        let writer = FailingWriter::new(0);
        let mut prompt = Prompt::new(0, "y\nn\n".as_bytes(), writer, Color::RED);

        let err = prompt.ask_bool("Ok?", true).unwrap_err();
        assert!(matches!(err, PromptError::Write(_)));
    }

    #[test]
    fn each_question_consumes_one_line() {
        let (mut prompt, _) = prompt_with("first\n\ny\n2,0\n");
        assert_eq!(prompt.ask_string("1", "d").unwrap(), "first");
        assert_eq!(prompt.ask_string("2", "d").unwrap(), "d");
        assert!(prompt.ask_bool("3", false).unwrap());
        assert_eq!(prompt.ask_indices("4", &["x"], &[]).unwrap(), vec![2, 0]);

        // A failed question doesn't poison the next one.
        let err = prompt.ask_string("5", "d").unwrap_err();
        assert!(matches!(err, PromptError::UnexpectedEof { .. }));
    }
}
