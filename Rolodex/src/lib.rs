//! # Rolodex
//!
//! Bounded recent-files list for editor shells: most-recently-used ordering,
//! a fixed pool of recyclable view handles, and full-rebuild synchronization
//! into a host menu.
//!
//! The list owns the ordering, capacity, and handle bookkeeping; everything
//! toolkit-shaped is behind three small traits the host implements or reuses:
//!
//! - [`MenuView`] - the rendering surface for the menu section
//! - [`Localization`] - display labels ([`DefaultLabels`] is built in)
//! - [`PersistenceWriter`] - session-end persistence ([`RecentFileHistory`]
//!   is built in)
//!
//! ## Quick Start
//!
//! ```
//! use rolodex::{DefaultLabels, MenuCommand, MenuView, RecentFileList};
//!
//! // A host would render into its menu toolkit here.
//! struct Headless;
//!
//! impl MenuView for Headless {
//!     fn insert_decoration(&mut self, _: usize, _: &[(MenuCommand, String)]) {}
//!     fn remove_decoration(&mut self, _: usize) {}
//!     fn insert_entry(&mut self, _: usize, _: u32, _: &str) {}
//!     fn remove_entry(&mut self, _: u32) {}
//!     fn remove_entry_at(&mut self, _: usize) {}
//! }
//!
//! let mut recent = RecentFileList::new(Headless, DefaultLabels::default(), 10, 3000, 0);
//! recent.add("/home/alice/notes.txt");
//! recent.add("/home/alice/todo.txt");
//! recent.add("/home/alice/notes.txt"); // touch: back to the front
//!
//! assert_eq!(recent.lookup_by_index(0)?, "/home/alice/notes.txt");
//! assert_eq!(recent.len(), 2);
//! # Ok::<(), rolodex::Error>(())
//! ```
//!
//! ## Persistence
//!
//! ```no_run
//! use rolodex::RecentFileHistory;
//!
//! // At session start:
//! let history = RecentFileHistory::load();
//! // ... build the list, then recent.restore(&history.files) ...
//!
//! // At session end:
//! // recent.persist(&mut history);
//! history.save()?;
//! # Ok::<(), rolodex::Error>(())
//! ```

pub mod error;
pub mod history;
pub mod labels;
pub mod list;
pub mod menu;
pub mod slots;

pub use error::{Error, Result};
pub use history::{PersistenceWriter, RecentFileHistory};
pub use labels::{DefaultLabels, Localization};
pub use list::{RecentEntry, RecentFileList};
pub use menu::{MenuCommand, MenuView};
pub use slots::MAX_RECENT_FILES;
