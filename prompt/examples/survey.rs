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

//! Run with `cargo run -p termkit_prompt --example survey`. Answer the questions, or just
//! press Enter to take the highlighted defaults.

use miette::IntoDiagnostic;
use ordermap::OrderMap;
use termkit_ansi_color::{Color, println};
use termkit_prompt::Prompt;

fn main() -> miette::Result<()> {
    let mut prompt = Prompt::new(
        b'\n',
        std::io::stdin().lock(),
        std::io::stdout(),
        Color::BRIGHT_CYAN,
    );

    let name = prompt.ask_string("What should we call you", "friend")?;
    let likes_rust = prompt.ask_bool("Do you write Rust", true)?;
    let editors = prompt.ask_indices(
        "Which editors do you use",
        &["helix", "neovim", "vscode", "zed"],
        &[0, 1],
    )?;

    let mut shells = OrderMap::new();
    shells.insert("b".to_string(), "bash".to_string());
    shells.insert("f".to_string(), "fish".to_string());
    shells.insert("z".to_string(), "zsh".to_string());
    let shell = prompt.ask_keys("Which shell", &shells, &["z".to_string()])?;

    let summary = format!(
        "Thanks {name}! rust: {likes_rust}, editors: {editors:?}, shell: {shell:?}"
    );
    println(Color::GREEN, Color::DEFAULT, &summary).into_diagnostic()?;
    Ok(())
}
