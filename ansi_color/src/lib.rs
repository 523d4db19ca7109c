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

//! # termkit_ansi_color
//!
//! Build ANSI "Select Graphic Rendition" (SGR) escape sequences and write colorized text
//! to any [std::io::Write] sink.
//!
//! - [sgr] joins symbolic codes (see [sgr_codes]) into one escape sequence. An empty list
//!   gives [RESET].
//! - [Color] is an opaque terminal color with a validity check ([Color::is_valid]).
//! - [fprint], [fprintln] and [fprintf] wrap text in the codes for a foreground and
//!   background [Color], then reset. They report the number of bytes written.
//! - [print] and [println] do the same on stdout, but honor [global_color_support].
//!
//! ```rust
//! use termkit_ansi_color::{Color, fprint, sgr, sgr_codes};
//!
//! assert_eq!(sgr([sgr_codes::BG_BLACK, sgr_codes::FG_RED]), "\x1b[40;31m");
//!
//! let mut out = Vec::new();
//! fprint(&mut out, Color::GREEN, Color::DEFAULT, "ok").unwrap();
//! assert_eq!(out, b"\x1b[32;49mok\x1b[0m");
//! ```

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach source files.
pub mod ansi_escape_codes;
pub mod color;
pub mod colored_text;
pub mod detect_color_support;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use colored_text::*;
pub use detect_color_support::*;
