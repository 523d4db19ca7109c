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

use std::{io::{Result, Write},
          sync::{Arc, Mutex}};

use strip_ansi_escapes::strip;

/// You can safely clone this struct, since it only contains an `Arc<Mutex<Vec<u8>>>`.
/// The inner `buffer` will not be cloned, just the [Arc] will be cloned. Hand one clone
/// to the code under test, and keep another to inspect what was written.
#[derive(Clone, Default, Debug)]
pub struct OutputMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
}

impl OutputMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

#[allow(clippy::missing_panics_doc)]
impl OutputMock {
    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.buffer.lock().unwrap().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        String::from_utf8(buffer_data.to_vec()).expect("utf8")
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let buffer_data = self.buffer.lock().unwrap();
        let buffer_data = strip(buffer_data.as_slice());
        String::from_utf8(buffer_data).expect("utf8")
    }

    #[must_use]
    pub fn len(&self) -> usize { self.buffer.lock().unwrap().len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Write for OutputMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

/// A sink that accepts `budget` bytes and then fails every write with
/// [std::io::ErrorKind::BrokenPipe]. Everything accepted lands in `inner`, so a test can
/// check that nothing else was written after the failure.
#[derive(Clone, Debug)]
pub struct FailingWriter {
    pub inner: OutputMock,
    pub budget: usize,
}

impl FailingWriter {
    #[must_use]
    pub fn new(budget: usize) -> Self {
        Self {
            inner: OutputMock::new(),
            budget,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        if self.budget == 0 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "output closed",
            ));
        }
        let count = buf.len().min(self.budget);
        self.budget -= count;
        self.inner.write(&buf[..count])
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}
