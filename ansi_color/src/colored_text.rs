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

use std::{fmt::{self, Display, Formatter},
          io::{self, Write}};

use smallvec::SmallVec;

use crate::{Color, ColorSupport, RESET, global_color_support, sgr};

/// Text paired with a foreground and a background [Color]. Its [Display] implementation
/// emits one SGR sequence for both colors, then the text, then [RESET]. An invalid color
/// contributes no parameter to the sequence.
///
/// # Example usage:
///
/// ```rust
/// use termkit_ansi_color::{Color, ColoredText};
///
/// let it = ColoredText::new("hello", Color::RED, Color::DEFAULT);
/// assert_eq!(it.to_string(), "\x1b[31;49mhello\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColoredText<'a> {
    pub text: &'a str,
    pub fg: Color,
    pub bg: Color,
}

impl<'a> ColoredText<'a> {
    #[must_use]
    pub fn new(text: &'a str, fg: Color, bg: Color) -> Self { Self { text, fg, bg } }

    fn open_sequence(&self) -> String {
        let params: SmallVec<[_; 2]> =
            [self.fg.fg_param(), self.bg.bg_param()].into_iter().flatten().collect();
        sgr(params)
    }
}

impl Display for ColoredText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open_sequence(), self.text, RESET)
    }
}

/// Write `text` to `sink` wrapped in the SGR codes for `fg` and `bg`. Returns the number
/// of bytes written, escape codes included.
///
/// # Errors
///
/// Any error returned by `sink`.
pub fn fprint(sink: &mut impl Write, fg: Color, bg: Color, text: &str) -> io::Result<usize> {
    write_styled(sink, &ColoredText::new(text, fg, bg).to_string())
}

/// Same as [fprint], with a trailing newline inside the colored span.
///
/// # Errors
///
/// Any error returned by `sink`.
pub fn fprintln(
    sink: &mut impl Write,
    fg: Color,
    bg: Color,
    text: &str,
) -> io::Result<usize> {
    let line = format!("{text}\n");
    fprint(sink, fg, bg, &line)
}

/// Same as [fprint], for preformatted arguments, eg: `format_args!("({})", 1)`.
///
/// # Errors
///
/// Any error returned by `sink`.
pub fn fprintf(
    sink: &mut impl Write,
    fg: Color,
    bg: Color,
    args: fmt::Arguments<'_>,
) -> io::Result<usize> {
    let text = fmt::format(args);
    fprint(sink, fg, bg, &text)
}

/// Print to stdout. Unlike [fprint], the escape codes are dropped when
/// [global_color_support::detect] reports [ColorSupport::NoColor].
///
/// # Errors
///
/// Any error writing to stdout.
pub fn print(fg: Color, bg: Color, text: &str) -> io::Result<usize> {
    let mut stdout = io::stdout().lock();
    match global_color_support::detect() {
        ColorSupport::NoColor => write_styled(&mut stdout, text),
        ColorSupport::Ansi => fprint(&mut stdout, fg, bg, text),
    }
}

/// Same as [print], with a trailing newline.
///
/// # Errors
///
/// Any error writing to stdout.
pub fn println(fg: Color, bg: Color, text: &str) -> io::Result<usize> {
    print(fg, bg, &format!("{text}\n"))
}

/// Issue exactly one write, so a failure can't leave a half written escape sequence
/// behind in a sink that accepted some of the bytes.
fn write_styled(sink: &mut impl Write, styled: &str) -> io::Result<usize> {
    sink.write_all(styled.as_bytes())?;
    Ok(styled.len())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fg_on_default_bg() {
        let it = ColoredText::new("Hello", Color::RED, Color::DEFAULT);
        assert_eq!(it.to_string(), "\x1b[31;49mHello\x1b[0m");
    }

    #[test]
    fn palette_fg_on_bright_bg() {
        let it = ColoredText::new("World", Color::ansi256(150), Color::BRIGHT_BLACK);
        assert_eq!(it.to_string(), "\x1b[38;5;150;100mWorld\x1b[0m");
    }

    #[test]
    fn invalid_colors_fall_back_to_reset_sequence() {
        let invalid = Color::from_raw(1_000);
        let it = ColoredText::new("plain", invalid, invalid);
        assert_eq!(it.to_string(), "\x1b[0mplain\x1b[0m");

        let it = ColoredText::new("half", Color::GREEN, invalid);
        assert_eq!(it.to_string(), "\x1b[32mhalf\x1b[0m");
    }

    #[test]
    fn fprint_reports_bytes_written() {
        let mut sink = Vec::new();
        let count = fprint(&mut sink, Color::BLUE, Color::DEFAULT, "abc").unwrap();
        assert_eq!(count, sink.len());
        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[34;49mabc\x1b[0m");
    }

    #[test]
    fn fprintln_puts_newline_inside_span() {
        let mut sink = Vec::new();
        fprintln(&mut sink, Color::DEFAULT, Color::DEFAULT, "q").unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[39;49mq\n\x1b[0m");
    }

    #[test]
    fn fprintf_formats_arguments() {
        let mut sink = Vec::new();
        fprintf(&mut sink, Color::YELLOW, Color::DEFAULT, format_args!("({})", 3))
            .unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "\x1b[33;49m(3)\x1b[0m");
    }

    #[test]
    fn sink_errors_are_returned() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> { Ok(()) }
        }

        let result = fprint(&mut Broken, Color::RED, Color::DEFAULT, "x");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }
}
