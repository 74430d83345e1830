//! # Tree Walker
//!
//! Depth-first traversal of the scan root. In every directory the matching
//! files are visited first, then each subdirectory is entered in turn.
//!
//! Only a missing root aborts the walk. Entries that cannot be read on the way
//! (permissions, directories vanishing mid-walk) are logged and skipped.
//! Symbolic links below the root are not followed.

use crate::error::{Result, TagCheckError};
use crate::filter::FileFilter;
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitOrder {
    /// Entries sorted by file name, for reproducible reports.
    #[default]
    Sorted,
    /// Whatever order the file system enumerates entries in.
    Native,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkStats {
    pub directories: usize,
    pub candidates: usize,
    pub ignored: usize,
    pub unreadable: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Walker {
    filter: FileFilter,
    order: VisitOrder,
}

impl Walker {
    pub fn new(filter: FileFilter, order: VisitOrder) -> Self {
        Self { filter, order }
    }

    /// Calls `on_file` once for every matching file under `root`.
    pub fn walk<F>(&self, root: &Path, mut on_file: F) -> Result<WalkStats>
    where
        F: FnMut(&Path),
    {
        if !root.is_dir() {
            return Err(TagCheckError::RootNotFound(root.to_path_buf()));
        }

        let sorted = self.order == VisitOrder::Sorted;
        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by(move |a, b| visit_order(a, b, sorted));

        let mut stats = WalkStats::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    stats.unreadable += 1;
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                tracing::debug!("Entering {}", entry.path().display());
                stats.directories += 1;
                continue;
            }
            if !file_type.is_file() || !self.filter.matches(entry.path()) {
                stats.ignored += 1;
                continue;
            }

            stats.candidates += 1;
            on_file(entry.path());
        }

        Ok(stats)
    }
}

/// Files before directories; within each group by name when `sorted`, otherwise
/// left in enumeration order (the sort is stable).
fn visit_order(a: &DirEntry, b: &DirEntry, sorted: bool) -> Ordering {
    let is_dir = |e: &DirEntry| e.file_type().is_dir();
    is_dir(a).cmp(&is_dir(b)).then_with(|| {
        if sorted {
            a.file_name().cmp(b.file_name())
        } else {
            Ordering::Equal
        }
    })
}
