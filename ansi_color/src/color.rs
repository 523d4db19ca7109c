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
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use std::{fmt::{Display, Formatter},
          str::FromStr};

use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumCount, EnumIter, EnumString};

use crate::sizing::SgrParam;

/// A terminal color. This is an opaque wrapper around a raw numeric code, so it is
/// possible to hold a value that doesn't name any color (see [Color::from_raw]). Use
/// [Color::is_valid] to check before handing a color to something that requires a real
/// one.
///
/// Raw code layout:
/// - `0` the terminal's default color.
/// - `1..=8` black, red, green, yellow, blue, magenta, cyan, white.
/// - `9..=16` the bright variants of the above.
/// - `256..=511` the 256 color palette, see [Color::ansi256].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u16);

/// The colors that have a name. Each one maps to a [Color] via [From].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumCount,
    EnumIter,
    EnumString,
    StrumDisplay,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum NamedColor {
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

mod constants {
    pub const LAST_NAMED_CODE: u16 = 16;
    pub const FIRST_BRIGHT_CODE: u16 = 9;
    pub const PALETTE_OFFSET: u16 = 256;
    pub const LAST_PALETTE_CODE: u16 = PALETTE_OFFSET + 255;
}
use constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorKind {
    Foreground,
    Background,
}

mod color_impl {
    use super::*;

    impl Color {
        pub const DEFAULT: Color = Color(0);
        pub const BLACK: Color = Color(1);
        pub const RED: Color = Color(2);
        pub const GREEN: Color = Color(3);
        pub const YELLOW: Color = Color(4);
        pub const BLUE: Color = Color(5);
        pub const MAGENTA: Color = Color(6);
        pub const CYAN: Color = Color(7);
        pub const WHITE: Color = Color(8);
        pub const BRIGHT_BLACK: Color = Color(9);
        pub const BRIGHT_RED: Color = Color(10);
        pub const BRIGHT_GREEN: Color = Color(11);
        pub const BRIGHT_YELLOW: Color = Color(12);
        pub const BRIGHT_BLUE: Color = Color(13);
        pub const BRIGHT_MAGENTA: Color = Color(14);
        pub const BRIGHT_CYAN: Color = Color(15);
        pub const BRIGHT_WHITE: Color = Color(16);

        /// A color from the 256 color palette.
        #[must_use]
        pub const fn ansi256(index: u8) -> Color { Color(PALETTE_OFFSET + index as u16) }

        /// No validation is done here. The result may not be a real color.
        #[must_use]
        pub const fn from_raw(raw: u16) -> Color { Color(raw) }

        #[must_use]
        pub const fn raw(self) -> u16 { self.0 }

        #[must_use]
        pub const fn is_valid(self) -> bool {
            self.0 <= LAST_NAMED_CODE
                || (self.0 >= PALETTE_OFFSET && self.0 <= LAST_PALETTE_CODE)
        }

        #[must_use]
        pub fn named(self) -> Option<NamedColor> {
            if self.0 > LAST_NAMED_CODE {
                return None;
            }
            NamedColor::iter().nth(usize::from(self.0))
        }

        #[must_use]
        pub fn palette_index(self) -> Option<u8> {
            if self.0 < PALETTE_OFFSET {
                return None;
            }
            u8::try_from(self.0 - PALETTE_OFFSET).ok()
        }

        /// The SGR parameter that sets this as the foreground color.
        #[must_use]
        pub fn fg_param(self) -> Option<SgrParam> { self.param(ColorKind::Foreground) }

        /// The SGR parameter that sets this as the background color.
        #[must_use]
        pub fn bg_param(self) -> Option<SgrParam> { self.param(ColorKind::Background) }

        fn param(self, color_kind: ColorKind) -> Option<SgrParam> {
            let (normal_base, bright_base, extended) = match color_kind {
                ColorKind::Foreground => (30, 90, 38),
                ColorKind::Background => (40, 100, 48),
            };

            let it = match self.0 {
                0 => format!("{}", normal_base + 9),
                code @ 1..FIRST_BRIGHT_CODE => format!("{}", normal_base + code - 1),
                code @ FIRST_BRIGHT_CODE..=LAST_NAMED_CODE => {
                    format!("{}", bright_base + code - FIRST_BRIGHT_CODE)
                }
                _ => format!("{extended};5;{}", self.palette_index()?),
            };

            Some(SgrParam::from_string(it))
        }
    }

    impl From<NamedColor> for Color {
        fn from(named: NamedColor) -> Self {
            // Variants are declared in raw code order.
            Color(named as u16)
        }
    }

    impl From<u8> for Color {
        fn from(index: u8) -> Self { Color::ansi256(index) }
    }

    /// Accepts a color name (eg: `red`, `bright-blue`, `default`) or a palette index in
    /// the range `0..=255`.
    impl FromStr for Color {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if let Ok(named) = NamedColor::from_str(s) {
                return Ok(named.into());
            }
            match s.parse::<u8>() {
                Ok(index) => Ok(Color::ansi256(index)),
                Err(_) => Err(format!(
                    "unknown color {s:?}, expected a color name or a palette index 0..=255"
                )),
            }
        }
    }

    impl Display for Color {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            match (self.named(), self.palette_index()) {
                (Some(named), _) => write!(f, "{named}"),
                (None, Some(index)) => write!(f, "{index}"),
                (None, None) => write!(f, "invalid({})", self.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;
    use test_case::test_case;

    use super::*;

    #[test]
    fn named_colors_are_valid() {
        for named in NamedColor::iter() {
            let color = Color::from(named);
            assert!(color.is_valid(), "{named}");
            assert_eq!(color.named(), Some(named));
        }
        assert_eq!(NamedColor::COUNT, usize::from(LAST_NAMED_CODE) + 1);
    }

    #[test_case(0)]
    #[test_case(150)]
    #[test_case(255)]
    fn palette_colors_are_valid(index: u8) {
        let color = Color::ansi256(index);
        assert!(color.is_valid());
        assert_eq!(color.palette_index(), Some(index));
        assert_eq!(color.named(), None);
    }

    #[test_case(17)]
    #[test_case(123)]
    #[test_case(255)]
    #[test_case(512)]
    #[test_case(u16::MAX)]
    fn out_of_range_raw_codes_are_invalid(raw: u16) {
        let color = Color::from_raw(raw);
        assert!(!color.is_valid());
        assert_eq!(color.fg_param(), None);
        assert_eq!(color.bg_param(), None);
    }

    #[test_case(Color::DEFAULT, "39", "49")]
    #[test_case(Color::BLACK, "30", "40")]
    #[test_case(Color::RED, "31", "41")]
    #[test_case(Color::WHITE, "37", "47")]
    #[test_case(Color::BRIGHT_BLACK, "90", "100")]
    #[test_case(Color::BRIGHT_WHITE, "97", "107")]
    #[test_case(Color::ansi256(42), "38;5;42", "48;5;42")]
    fn params(color: Color, fg: &str, bg: &str) {
        assert_eq!(color.fg_param().as_deref(), Some(fg));
        assert_eq!(color.bg_param().as_deref(), Some(bg));
    }

    #[test_case("red", Color::RED)]
    #[test_case("Bright-Blue", Color::BRIGHT_BLUE)]
    #[test_case("default", Color::DEFAULT)]
    #[test_case("208", Color::ansi256(208))]
    fn parse(input: &str, expected: Color) {
        assert_eq!(input.parse::<Color>(), Ok(expected));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("mauve".parse::<Color>().is_err());
        assert!("256".parse::<Color>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Color::BRIGHT_MAGENTA.to_string(), "bright-magenta");
        assert_eq!(Color::ansi256(7).to_string(), "7");
        assert_eq!(Color::from_raw(100).to_string(), "invalid(100)");
    }
}
