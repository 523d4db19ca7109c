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

use std::{io, num::ParseIntError};

/// Everything that can go wrong while asking one question. Whichever of these happens
/// first is what the question returns; nothing after it is attempted.
///
/// | Variant           | Cause                                                    |
/// |-------------------|----------------------------------------------------------|
/// | [`Write`]         | The output sink rejected the question text               |
/// | [`Read`]          | The input stream failed, eg: timed out                   |
/// | [`UnexpectedEof`] | The input stream ended before the delimiter              |
/// | [`InvalidIndex`]  | An index selection answer contained a non integer token  |
///
/// [`Write`]: Self::Write
/// [`Read`]: Self::Read
/// [`UnexpectedEof`]: Self::UnexpectedEof
/// [`InvalidIndex`]: Self::InvalidIndex
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    #[error("Failed to write the question")]
    #[diagnostic(code(termkit_prompt::write))]
    Write(#[source] io::Error),

    #[error("Failed to read the answer")]
    #[diagnostic(code(termkit_prompt::read))]
    Read(#[source] io::Error),

    #[error("Input ended before the delimiter {delimiter:?} was found")]
    #[diagnostic(
        code(termkit_prompt::unexpected_eof),
        help("Each answer has to be terminated by the delimiter, eg: press Enter")
    )]
    UnexpectedEof { delimiter: char },

    #[error("{token:?} is not a valid choice")]
    #[diagnostic(
        code(termkit_prompt::invalid_index),
        help("Enter the numbers shown in parentheses, separated by commas")
    )]
    InvalidIndex {
        token: String,
        #[source]
        source: ParseIntError,
    },
}
