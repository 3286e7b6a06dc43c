//! Host menu contract

/// Management commands rendered below the file entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Reopen the most recently closed file.
    RestoreLastClosed,
    /// Open every file currently in the list.
    OpenAll,
    /// Empty the list.
    ClearList,
}

impl MenuCommand {
    /// All commands, in menu order.
    pub const ALL: [MenuCommand; 3] = [
        MenuCommand::RestoreLastClosed,
        MenuCommand::OpenAll,
        MenuCommand::ClearList,
    ];

    /// Built-in label used when the localization source has no translation.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            MenuCommand::RestoreLastClosed => "Restore Recent Closed File",
            MenuCommand::OpenAll => "Open All Recent Files",
            MenuCommand::ClearList => "Empty Recent Files List",
        }
    }
}

/// Rendering surface for the recent-files section of a host menu.
///
/// Positions are list-like: inserting at `p` shifts existing controls at `p`
/// and beyond down by one. File entries are addressed either by position or
/// by the handle they were inserted with; the decoration (separator plus the
/// management commands) is one opaque block whose concrete rendering is the
/// implementation's business.
///
/// Implementations are called synchronously from the list's mutating
/// operations and must not call back into the list while a sync is running.
pub trait MenuView {
    /// Insert the separator + management-commands block at `position`.
    fn insert_decoration(&mut self, position: usize, commands: &[(MenuCommand, String)]);

    /// Remove the decoration block previously inserted at `position`.
    fn remove_decoration(&mut self, position: usize);

    /// Insert one file entry control.
    fn insert_entry(&mut self, position: usize, handle: u32, label: &str);

    /// Remove the entry control with the given handle, wherever it sits.
    fn remove_entry(&mut self, handle: u32);

    /// Remove the entry control at `position`.
    fn remove_entry_at(&mut self, position: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels_cover_every_command() {
        for command in MenuCommand::ALL {
            assert!(!command.default_label().is_empty());
        }
    }
}
