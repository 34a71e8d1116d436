//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Style Demonstration
//!
//! Prints every foreground color and decoration when standard output is a
//! terminal, then writes one line per log level through a stdout logger.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example style_demo
//! TERMILOG_MINLEVEL=debug cargo run --example style_demo
//! ```

use termilog_logger::Logger;
use termilog_style::{Color, Style, is_terminal};

fn main() {
    if is_terminal(&std::io::stdout()) {
        println!("You are in terminal");

        for color in Color::ALL {
            println!("{}", Style::from(color).render(format_args!("Hello with {}", color)));
        }

        println!("{}", Style::NORMAL.render("Hello with Normal Black"));
        println!("{}", Style::BOLD.render("Hello with Bolded Black"));
        println!("{}", Style::UNDERLINE.render("Hello with Underlined Black"));

        println!("{}", Style::FG_RED.with_bold(true).render("Hello with Bolded Red"));
        println!("{}", Style::FG_RED.with_bold(false).render("Hello with Unbolded Red"));
        println!(
            "{}",
            Style::FG_RED.with_underline(true).render("Hello with Underlined Red")
        );
        println!(
            "{}",
            Style::FG_RED.with_underline(false).render("Hello with Ununderlined Red")
        );
        println!(
            "{}",
            Style::FG_RED
                .with_underline(true)
                .with_foreground_color(Style::FG_MAGENTA)
                .render("Hello with Underlined Magenta")
        );
    } else {
        println!("You are not in terminal");
    }

    let mut logger = Logger::stdout();
    logger.debug("Hello from DEBUG level\n");
    logger.info("Hello from INFO level");
    logger.warn("Hello from WARN level");
    logger.error("Hello from ERROR level");
}
