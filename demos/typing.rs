//!
//! Feeds keystrokes to the phone formatter the way a text field would,
//! and prints each result.
//!
//! Logs go to `typing.log`.
//!

use log::debug;
use rat_mask_format::{EditDelta, FormatResult, MaskFormatter};
use std::fs;
use std::path::PathBuf;

/// What the user does.
#[derive(Debug)]
enum Key {
    Type(&'static str),
    Paste(&'static str),
    Backspace,
    Delete,
    Home,
    End,
}

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut fmt = MaskFormatter::phone()?;

    let keys = [
        Key::Type("3"),
        Key::Type("8"),
        Key::Type("0"),
        Key::Type("4"),
        Key::Type("4"),
        Key::Type(" "),
        Key::Type("1"),
        Key::Type("2"),
        Key::Type("3"),
        Key::Backspace,
        Key::Backspace,
        Key::Backspace,
        Key::Backspace,
        Key::Home,
        Key::Delete,
        Key::End,
        Key::Paste("1234567"),
    ];

    let mut state = FormatResult::default();
    for key in keys {
        let delta = match key {
            Key::Type(s) | Key::Paste(s) => EditDelta::insert_str(&state.text, state.cursor, s),
            Key::Backspace => EditDelta::remove_prev(&state.text, state.cursor),
            Key::Delete => EditDelta::remove_next(&state.text, state.cursor),
            Key::Home => {
                state.cursor = 0;
                continue;
            }
            Key::End => {
                state.cursor = rat_mask_format::grapheme_len(&state.text);
                continue;
            }
        };
        debug!("{:?} {:?}", key, delta);

        state = fmt.process(&delta).clone();
        println!(
            "{:<12} {:<24} cursor {:>2} clean {:<14} {}",
            format!("{:?}", key),
            state.text,
            state.cursor,
            state.clean,
            if state.valid { "valid" } else { "" }
        );
    }
    println!("mask {:?}", fmt.current_mask());

    Ok(())
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("typing.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
