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

use strum::IntoEnumIterator;
use termkit_ansi_color::{Color,
                         ColorSupport,
                         ColoredText,
                         NamedColor,
                         SgrCode,
                         global_color_support,
                         println,
                         sgr,
                         sgr_codes};

fn main() -> std::io::Result<()> {
    // Combine raw SGR codes by hand.
    {
        let open = sgr([sgr_codes::BOLD, sgr_codes::UNDERLINE, sgr_codes::FG_CYAN]);
        let close = sgr(Vec::<&str>::new());
        std::println!("{open}Bold, underlined and cyan.{close}");
        std::println!(
            "{}Strikethrough.{}",
            SgrCode::Strikethrough,
            SgrCode::Reset
        );
    }

    // Every named color, as a foreground.
    {
        for named in NamedColor::iter() {
            let color = Color::from(named);
            std::println!("{}", ColoredText::new(&named.to_string(), color, Color::DEFAULT));
        }
    }

    // A strip of the 256 color palette, as a background.
    {
        let strip: String = (16..=51)
            .map(|index| ColoredText::new(" ", Color::DEFAULT, Color::ansi256(index)).to_string())
            .collect();
        std::println!("{strip}");
    }

    // Force color off, then back to runtime detection.
    {
        global_color_support::set_override(ColorSupport::NoColor);
        let msg = format!("> Forced ({:?})", global_color_support::detect());
        println(Color::YELLOW, Color::BLUE, &msg)?;

        global_color_support::clear_override();
        let msg = format!("> Runtime detection ({:?})", global_color_support::detect());
        println(Color::YELLOW, Color::BLUE, &msg)?;
    }

    Ok(())
}
