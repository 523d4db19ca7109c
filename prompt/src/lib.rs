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

//! # termkit_prompt
//!
//! Line oriented questions for command line apps. A [Prompt] writes a question to any
//! [std::io::Write] sink, with defaults shown in a highlight color, then reads a single
//! line from any [std::io::Read] source and turns it into an answer:
//!
//! | Method                  | Answer            | Empty line gives  |
//! |-------------------------|-------------------|-------------------|
//! | [Prompt::ask_string]    | the line as typed | the default text  |
//! | [Prompt::ask_bool]      | `y`/`yes`/`n`/`no` | the default      |
//! | [Prompt::ask_indices]   | `1,3`             | the default list  |
//! | [Prompt::ask_keys]      | `a,c`             | the default list  |
//!
//! Each question either returns its answer or the first [PromptError] it ran into. A
//! failure part way through a question stops all further output for that question.
//!
//! ```rust
//! use ordermap::OrderMap;
//! use termkit_ansi_color::Color;
//! use termkit_prompt::Prompt;
//!
//! let input = "1,2\n\n".as_bytes();
//! let mut prompt = Prompt::new(0, input, std::io::sink(), Color::GREEN);
//!
//! let picked = prompt.ask_indices("Toppings", &["cheese", "olives", "basil"], &[0]);
//! assert_eq!(picked.unwrap(), vec![1, 2]);
//!
//! let mut sizes = OrderMap::new();
//! sizes.insert("s".to_string(), "small".to_string());
//! sizes.insert("l".to_string(), "large".to_string());
//! let size = prompt.ask_keys("Size", &sizes, &["l".to_string()]);
//! assert_eq!(size.unwrap(), vec!["l".to_string()]);
//! ```

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod constants;
pub mod error;
pub mod prompt;
pub mod transcript;

// Re-export.
pub use constants::*;
pub use error::*;
pub use prompt::*;
pub use transcript::*;
