use std::io::IsTerminal;

use crate::cli::{ColorMode, GlobalFlags};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UiPrefs {
    pub color: bool,
    pub status_line: bool,
}

#[must_use]
pub fn prefs(flags: &GlobalFlags) -> UiPrefs {
    resolve(flags, std::io::stderr().is_terminal(), std::env::var_os("NO_COLOR").is_some())
}

fn resolve(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> UiPrefs {
    let color = match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !no_color,
    };

    UiPrefs {
        color,
        status_line: is_tty && !flags.quiet,
    }
}
