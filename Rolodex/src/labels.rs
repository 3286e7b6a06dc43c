//! Display-label construction for menu controls

use std::path::{Component, Path, MAIN_SEPARATOR};

use crate::menu::MenuCommand;

/// Source of display text for menu controls.
pub trait Localization {
    /// Display label for the entry at `index` (0 = most recent) showing
    /// `path`.
    fn entry_label(&self, index: usize, path: &str) -> String;

    /// Translated label for a management command. `None` or an empty string
    /// falls back to [`MenuCommand::default_label`].
    fn command_label(&self, command: MenuCommand) -> Option<String>;
}

/// Built-in labels: ordinal mnemonics plus optional path abbreviation.
///
/// Entries are numbered so the first nine get single-key mnemonics (`&1:`
/// through `&9:`), the tenth gets `1&0:`, and the rest plain numbers.
#[derive(Debug, Clone, Default)]
pub struct DefaultLabels {
    display_len: usize,
}

impl DefaultLabels {
    /// `display_len` of 0 shows full paths; otherwise longer paths are
    /// abbreviated around `...`, keeping the root and the file name.
    #[must_use]
    pub fn new(display_len: usize) -> Self {
        DefaultLabels { display_len }
    }
}

impl Localization for DefaultLabels {
    fn entry_label(&self, index: usize, path: &str) -> String {
        format!(
            "{}{}",
            ordinal_prefix(index),
            display_path(path, self.display_len)
        )
    }

    fn command_label(&self, _command: MenuCommand) -> Option<String> {
        None
    }
}

fn ordinal_prefix(index: usize) -> String {
    if index < 9 {
        format!("&{}: ", index + 1)
    } else if index == 9 {
        "1&0: ".to_string()
    } else {
        format!("{}: ", index + 1)
    }
}

/// Shorten `path` to roughly `max` characters by dropping middle components,
/// always keeping the root and the file name. `max` of 0 disables
/// abbreviation.
fn display_path(path: &str, max: usize) -> String {
    if max == 0 || path.chars().count() <= max {
        return path.to_string();
    }

    let parsed = Path::new(path);
    let Some(name) = parsed.file_name().map(|n| n.to_string_lossy().into_owned()) else {
        return path.to_string();
    };
    let root: String = parsed
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    // Grow the kept tail one directory at a time while it still fits.
    let mut tail = name;
    for component in parsed.components().rev().skip(1) {
        let Component::Normal(dir) = component else {
            break;
        };
        let candidate = format!("{}{MAIN_SEPARATOR}{tail}", dir.to_string_lossy());
        if root.chars().count() + 4 + candidate.chars().count() > max {
            break;
        }
        tail = candidate;
    }

    format!("{root}...{MAIN_SEPARATOR}{tail}")
}
