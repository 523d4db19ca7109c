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

//! # termkit_test_fixtures
//!
//! Reusable fixtures for testing code that talks to a terminal through plain
//! [std::io::Read] and [std::io::Write] handles. This crate is intended to be a
//! [`dev-dependency`](https://doc.rust-lang.org/cargo/reference/specifying-dependencies.html#dev-dependencies)
//! for the other crates in the workspace.
//!
//! 1. The input fixtures ([ScriptedReader]) simulate streams that stall or break.
//! 2. The output fixtures ([OutputMock], [FailingWriter]) capture what was written, with
//!    or without the ANSI escape codes, and simulate a sink that goes away.

// Attach sources.
pub mod input_device_fixtures;
pub mod output_device_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
