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

//! `ask` puts one question on stderr and prints the answer on stdout, so it can be used
//! from shell scripts: `name=$(ask text "Name" --default anon)`.

use std::io::{self, Write, stderr, stdin};

use clap::Parser;
use ordermap::OrderMap;
use termkit_ansi_color::{Color,
                         ColorSupport,
                         Stream,
                         examine_env_vars_to_determine_color_support};
use termkit_prompt::Prompt;

fn main() -> miette::Result<()> {
    use clap_config::*;

    let ask_app_args = AskAppArgs::parse();

    if ask_app_args.global_options.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
        tracing::debug!(?ask_app_args, "start");
    }

    let GlobalOptions {
        highlight,
        delimiter,
        ..
    } = ask_app_args.global_options;
    let color_support = examine_env_vars_to_determine_color_support(Stream::Stderr);
    let (output, highlight) = question_sink(stderr(), color_support, highlight);
    let mut prompt = Prompt::new(delimiter, stdin().lock(), output, highlight);

    let answer = match ask_app_args.command {
        CLICommands::Text { question, default } => prompt.ask_string(&question, &default)?,
        CLICommands::Bool { question, default } => {
            prompt.ask_bool(&question, default)?.to_string()
        }
        CLICommands::Select {
            question,
            options,
            default,
        } => join(prompt.ask_indices(&question, &options, &default)?),
        CLICommands::Keys {
            question,
            options,
            default,
        } => {
            let options: OrderMap<String, String> = options.into_iter().collect();
            prompt.ask_keys(&question, &options, &default)?.join(",")
        }
    };

    println!("{answer}");
    Ok(())
}

/// Questions go to stderr. When it can't show colors, escape codes are stripped on the
/// way out and the highlight is dropped.
fn question_sink<W: Write + 'static>(
    sink: W,
    color_support: ColorSupport,
    highlight: Color,
) -> (Box<dyn Write>, Color) {
    match color_support {
        ColorSupport::Ansi => (Box::new(sink), highlight),
        ColorSupport::NoColor => {
            tracing::debug!("no color support on stderr, stripping escape codes");
            (Box::new(strip_ansi_escapes::Writer::new(sink)), Color::DEFAULT)
        }
    }
}

fn join(indices: Vec<isize>) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

mod clap_config {
    use clap::{Args, Subcommand};
    use termkit_ansi_color::Color;

    use super::Parser;

    #[derive(Debug, Parser)]
    #[command(bin_name = "ask")]
    #[command(about = "Ask a question on the terminal, print the answer", long_about = None)]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(true))]
    pub struct AskAppArgs {
        #[clap(subcommand)]
        pub command: CLICommands,

        #[clap(flatten)]
        pub global_options: GlobalOptions,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOptions {
        /// Color of default values: a name (eg: `bright-cyan`) or a palette index 0..=255
        #[arg(value_name = "color", long, short = 'c', default_value = "green", global = true)]
        pub highlight: Color,

        /// Single ASCII character that ends an answer
        #[arg(
            value_name = "char",
            long,
            short = 'd',
            default_value = "\n",
            hide_default_value = true,
            value_parser = parse_delimiter,
            global = true
        )]
        pub delimiter: u8,

        /// Print debug output to stderr
        #[arg(long, short = 'v', global = true)]
        pub verbose: bool,
    }

    #[derive(Debug, Subcommand)]
    pub enum CLICommands {
        /// Ask for free text
        Text {
            question: String,

            /// Used when the answer is empty
            #[arg(long, default_value = "")]
            default: String,
        },

        /// Ask a yes/no question, prints `true` or `false`
        Bool {
            question: String,

            /// Used when the answer is empty or not yes/no
            #[arg(long)]
            default: bool,
        },

        /// Ask to pick options by number, prints the numbers separated by commas
        Select {
            question: String,

            #[arg(required = true)]
            options: Vec<String>,

            /// Index of an option picked when the answer is empty, repeatable
            #[arg(long, allow_negative_numbers = true)]
            default: Vec<isize>,
        },

        /// Ask to pick options by key, prints the keys separated by commas
        Keys {
            question: String,

            /// `key=description` pairs, shown in the order given
            #[arg(required = true, value_parser = parse_key_value)]
            options: Vec<(String, String)>,

            /// Key of an option picked when the answer is empty, repeatable
            #[arg(long)]
            default: Vec<String>,
        },
    }

    fn parse_delimiter(arg: &str) -> Result<u8, String> {
        let mut chars = arg.chars();
        match (chars.next(), chars.next()) {
            (Some(it), None) if it.is_ascii() && it != '\0' => Ok(it as u8),
            _ => Err(format!("{arg:?} is not a single ASCII character")),
        }
    }

    fn parse_key_value(arg: &str) -> Result<(String, String), String> {
        match arg.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(format!("{arg:?} is not a key=description pair")),
        }
    }

    #[cfg(test)]
    mod tests {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn delimiter() {
            assert_eq!(parse_delimiter("\n"), Ok(b'\n'));
            assert_eq!(parse_delimiter(";"), Ok(b';'));
            assert!(parse_delimiter("ab").is_err());
            assert!(parse_delimiter("é").is_err());
            assert!(parse_delimiter("").is_err());
        }

        #[test]
        fn key_value() {
            assert_eq!(
                parse_key_value("a=apple"),
                Ok(("a".to_string(), "apple".to_string()))
            );
            assert_eq!(
                parse_key_value("eq=a=b"),
                Ok(("eq".to_string(), "a=b".to_string()))
            );
            assert!(parse_key_value("=x").is_err());
            assert!(parse_key_value("nope").is_err());
        }

        #[test]
        fn args_parse() {
            let args = AskAppArgs::parse_from([
                "ask", "select", "Pick", "one", "two", "--default", "1", "-c", "208",
            ]);
            assert_eq!(args.global_options.highlight, Color::ansi256(208));
            assert_eq!(args.global_options.delimiter, b'\n');
            match args.command {
                CLICommands::Select {
                    options, default, ..
                } => {
                    assert_eq!(options, vec!["one".to_string(), "two".to_string()]);
                    assert_eq!(default, vec![1]);
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }

        #[test]
        fn args_parse_negative_default() {
            let args =
                AskAppArgs::parse_from(["ask", "select", "Pick", "one", "--default", "-1"]);
            match args.command {
                CLICommands::Select { default, .. } => assert_eq!(default, vec![-1]),
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }
}
