//! Locating the validation suite's entry point.
//!
//! The search space is the cross product of ancestor depths (start
//! directory, parent, grandparent) and a fixed ordered list of relative
//! filename patterns, iterated depth-major. Precedence is strict: a match
//! at a lower depth always beats one deeper up the tree, and an earlier
//! pattern beats a later one at the same depth.

use std::path::{Path, PathBuf};

/// Relative paths tried at each depth, in priority order.
pub const ENTRY_PATTERNS: &[&str] = &[
    "test/run_dev_check.py",
    "test/checkDev.py",
    "run_dev_check.py",
];

/// Ancestor depths searched: 0 = start directory, 1 = parent, 2 = grandparent.
pub const MAX_SEARCH_DEPTH: usize = 2;

/// A located validation entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    /// The entry script itself.
    pub script: PathBuf,
    /// The directory the pattern was anchored at; becomes the validator's
    /// working directory and the base for report artifact paths.
    pub project_root: PathBuf,
    /// Ancestor depth the match was found at.
    pub depth: usize,
}

/// Search for the entry point starting from `start`.
///
/// Returns the first existing candidate, or `Err` with the complete list
/// of paths that were checked, for diagnostics.
pub fn locate_from(start: &Path) -> Result<ResolvedEntry, Vec<PathBuf>> {
    let mut checked = Vec::new();
    let mut root = start.to_path_buf();

    for depth in 0..=MAX_SEARCH_DEPTH {
        for pattern in ENTRY_PATTERNS {
            let candidate = root.join(pattern);
            if candidate.is_file() {
                return Ok(ResolvedEntry {
                    script: candidate,
                    project_root: root,
                    depth,
                });
            }
            checked.push(candidate);
        }
        match root.parent() {
            Some(parent) => root = parent.to_path_buf(),
            // Filesystem root reached; remaining depths have no candidates
            // beyond those already recorded.
            None => break,
        }
    }

    Err(checked)
}

/// Search from the current working directory.
pub fn locate() -> Result<ResolvedEntry, Vec<PathBuf>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    locate_from(&cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/usr/bin/env python3\n").unwrap();
    }

    #[test]
    fn finds_entry_at_depth_zero() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("test/run_dev_check.py"));

        let entry = locate_from(temp.path()).unwrap();
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.project_root, temp.path());
        assert_eq!(entry.script, temp.path().join("test/run_dev_check.py"));
    }

    #[test]
    fn depth_zero_beats_depth_one() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();

        // Same pattern at both depths
        touch(&temp.path().join("test/run_dev_check.py"));
        touch(&child.join("test/run_dev_check.py"));

        let entry = locate_from(&child).unwrap();
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.project_root, child);
    }

    #[test]
    fn earlier_pattern_beats_later_at_same_depth() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("test/checkDev.py"));
        touch(&temp.path().join("run_dev_check.py"));

        let entry = locate_from(temp.path()).unwrap();
        assert_eq!(entry.script, temp.path().join("test/checkDev.py"));
    }

    #[test]
    fn walks_up_to_grandparent() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a/b");
        fs::create_dir_all(&deep).unwrap();
        touch(&temp.path().join("test/run_dev_check.py"));

        let entry = locate_from(&deep).unwrap();
        assert_eq!(entry.depth, 2);
        assert_eq!(entry.project_root, temp.path());
    }

    #[test]
    fn not_found_reports_every_checked_path() {
        let temp = TempDir::new().unwrap();
        let deep = temp.path().join("a/b");
        fs::create_dir_all(&deep).unwrap();

        let checked = locate_from(&deep).unwrap_err();
        // 3 depths x 3 patterns
        assert_eq!(checked.len(), ENTRY_PATTERNS.len() * (MAX_SEARCH_DEPTH + 1));
        assert!(checked.contains(&deep.join("test/run_dev_check.py")));
        assert!(checked.contains(&temp.path().join("run_dev_check.py")));
    }

    #[test]
    fn a_deeper_match_is_ignored_while_checking_shallower_depths_first() {
        let temp = TempDir::new().unwrap();
        let child = temp.path().join("child");
        fs::create_dir_all(&child).unwrap();

        // Later pattern at depth 0, earlier pattern at depth 1: depth wins.
        touch(&child.join("run_dev_check.py"));
        touch(&temp.path().join("test/run_dev_check.py"));

        let entry = locate_from(&child).unwrap();
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.script, child.join("run_dev_check.py"));
    }
}
