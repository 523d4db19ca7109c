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

use std::{collections::VecDeque,
          io::{Error, ErrorKind, Read, Result}};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadStep {
    Data(Vec<u8>),
    Fail(ErrorKind),
}

/// A reader that plays back a script of chunks and failures, one per call to
/// [Read::read], and then reports end of stream. Use it to simulate a stream that times
/// out or breaks partway through a line.
///
/// ```rust
/// use std::io::{ErrorKind, Read};
/// use termkit_test_fixtures::ScriptedReader;
///
/// let mut reader = ScriptedReader::data_then_fail("hello", ErrorKind::TimedOut);
/// let mut buf = [0; 16];
/// assert_eq!(reader.read(&mut buf).unwrap(), 5);
/// assert_eq!(reader.read(&mut buf).unwrap_err().kind(), ErrorKind::TimedOut);
/// assert_eq!(reader.read(&mut buf).unwrap(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedReader {
    pub steps: VecDeque<ReadStep>,
}

impl ScriptedReader {
    #[must_use]
    pub fn new(steps: impl IntoIterator<Item = ReadStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn data_then_fail(data: &str, kind: ErrorKind) -> Self {
        Self::new([ReadStep::Data(data.as_bytes().to_vec()), ReadStep::Fail(kind)])
    }
}

impl Read for ScriptedReader {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.steps.pop_front() {
            None => Ok(0),
            Some(ReadStep::Fail(kind)) => Err(Error::new(kind, "scripted failure")),
            Some(ReadStep::Data(mut data)) => {
                let count = data.len().min(buf.len());
                buf[..count].copy_from_slice(&data[..count]);
                if count < data.len() {
                    self.steps.push_front(ReadStep::Data(data.split_off(count)));
                }
                Ok(count)
            }
        }
    }
}
