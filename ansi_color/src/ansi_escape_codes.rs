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

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::Color;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Final byte of a Select Graphic Rendition sequence.
pub const SGR: &str = "m";
/// Resets every attribute. This is what [sgr] returns for an empty list of codes.
pub const RESET: &str = "\x1b[0m";

/// Build a single SGR escape sequence out of the given parameter `codes`.
///
/// The codes are joined with `;` in the order given. Terminals apply them left to right,
/// so a later code overrides an earlier one for the same attribute. An empty list
/// produces [RESET].
///
/// ```rust
/// use termkit_ansi_color::{RESET, sgr, sgr_codes};
///
/// assert_eq!(sgr([sgr_codes::BG_BLACK, sgr_codes::FG_RED]), "\x1b[40;31m");
/// assert_eq!(sgr([sgr_codes::BOLD]), "\x1b[1m");
/// assert_eq!(sgr(Vec::<String>::new()), RESET);
/// ```
pub fn sgr<I>(codes: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut acc = String::from(CSI);
    let mut is_empty = true;

    for code in codes {
        if !is_empty {
            acc.push(';');
        }
        acc.push_str(code.as_ref());
        is_empty = false;
    }

    if is_empty {
        return RESET.to_string();
    }

    acc.push_str(SGR);
    acc
}

/// The symbolic parameter vocabulary. Pass any combination of these to [sgr].
pub mod sgr_codes {
    pub const RESET: &str = "0";
    pub const BOLD: &str = "1";
    pub const FAINT: &str = "2";
    pub const ITALIC: &str = "3";
    pub const UNDERLINE: &str = "4";
    pub const SLOW_BLINK: &str = "5";
    pub const RAPID_BLINK: &str = "6";
    pub const REVERSE: &str = "7";
    pub const CONCEAL: &str = "8";
    pub const STRIKETHROUGH: &str = "9";
    pub const NORMAL_INTENSITY: &str = "22";

    pub const FG_BLACK: &str = "30";
    pub const FG_RED: &str = "31";
    pub const FG_GREEN: &str = "32";
    pub const FG_YELLOW: &str = "33";
    pub const FG_BLUE: &str = "34";
    pub const FG_MAGENTA: &str = "35";
    pub const FG_CYAN: &str = "36";
    pub const FG_WHITE: &str = "37";
    pub const FG_DEFAULT: &str = "39";

    pub const BG_BLACK: &str = "40";
    pub const BG_RED: &str = "41";
    pub const BG_GREEN: &str = "42";
    pub const BG_YELLOW: &str = "43";
    pub const BG_BLUE: &str = "44";
    pub const BG_MAGENTA: &str = "45";
    pub const BG_CYAN: &str = "46";
    pub const BG_WHITE: &str = "47";
    pub const BG_DEFAULT: &str = "49";

    pub const FG_BRIGHT_BLACK: &str = "90";
    pub const FG_BRIGHT_RED: &str = "91";
    pub const FG_BRIGHT_GREEN: &str = "92";
    pub const FG_BRIGHT_YELLOW: &str = "93";
    pub const FG_BRIGHT_BLUE: &str = "94";
    pub const FG_BRIGHT_MAGENTA: &str = "95";
    pub const FG_BRIGHT_CYAN: &str = "96";
    pub const FG_BRIGHT_WHITE: &str = "97";

    pub const BG_BRIGHT_BLACK: &str = "100";
    pub const BG_BRIGHT_RED: &str = "101";
    pub const BG_BRIGHT_GREEN: &str = "102";
    pub const BG_BRIGHT_YELLOW: &str = "103";
    pub const BG_BRIGHT_BLUE: &str = "104";
    pub const BG_BRIGHT_MAGENTA: &str = "105";
    pub const BG_BRIGHT_CYAN: &str = "106";
    pub const BG_BRIGHT_WHITE: &str = "107";
}

pub mod sizing {
    /// Longest parameter is a palette color, eg: `38;5;255`.
    pub const MAX_SGR_PARAM_SIZE: usize = 8;
    pub type SgrParam = smallstr::SmallString<[u8; MAX_SGR_PARAM_SIZE]>;
}

/// Typed counterpart of [sgr_codes]. Each variant renders (via [Display]) as a complete
/// escape sequence, while [SgrCode::param] gives just the parameter so that several codes
/// can be merged into one sequence with [sgr].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reverse,
    Conceal,
    Strikethrough,
    Foreground(Color),
    Background(Color),
}

mod sgr_code_impl {
    use super::*;

    impl SgrCode {
        /// Returns `None` for a [Color] that is not valid.
        #[rustfmt::skip]
        #[must_use]
        pub fn param(&self) -> Option<sizing::SgrParam> {
            let it = match *self {
                SgrCode::Reset         => sgr_codes::RESET,
                SgrCode::Bold          => sgr_codes::BOLD,
                SgrCode::Faint         => sgr_codes::FAINT,
                SgrCode::Italic        => sgr_codes::ITALIC,
                SgrCode::Underline     => sgr_codes::UNDERLINE,
                SgrCode::SlowBlink     => sgr_codes::SLOW_BLINK,
                SgrCode::RapidBlink    => sgr_codes::RAPID_BLINK,
                SgrCode::Reverse       => sgr_codes::REVERSE,
                SgrCode::Conceal       => sgr_codes::CONCEAL,
                SgrCode::Strikethrough => sgr_codes::STRIKETHROUGH,
                SgrCode::Foreground(color) => return color.fg_param(),
                SgrCode::Background(color) => return color.bg_param(),
            };
            Some(SmallString::from_str(it))
        }
    }

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self.param() {
                Some(param) => write!(f, "{}", sgr([param])),
                None => Ok(()),
            }
        }
    }
}
