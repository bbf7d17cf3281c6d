// SPDX-License-Identifier: MPL-2.0
//! Binary entry point: parses CLI arguments and launches the viewer.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use iced_reveal::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let paths = args
        .finish()
        .into_iter()
        .filter_map(|os| os.into_string().ok())
        .collect();

    app::run(Flags { lang, paths })
}
