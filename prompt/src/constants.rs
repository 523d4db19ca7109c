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

use termkit_ansi_color::Color;

// Glyphs. Full width, so they stand out from the text of a question.
pub const OPEN_PAREN: &str = "（";
pub const CLOSE_PAREN: &str = "）";
pub const PROMPT_COLON: &str = "：";

// Answers.
pub const YES_MARK: &str = "Y";
pub const NO_MARK: &str = "N";
pub const CHOICE_SEPARATOR: char = ',';
pub const SELECT_HINT: &str = "Enter your choice, separate multiple choices with a comma (,)";

// Defaults.
pub const DEFAULT_DELIMITER: u8 = b'\n';
pub const PLAIN_COLOR: Color = Color::DEFAULT;
