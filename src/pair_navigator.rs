// SPDX-License-Identifier: MPL-2.0
//! Discovery of before/after pairs and navigation between them.
//!
//! A pair is two files in the same directory whose stems share a base title
//! and end in a `before`/`after` marker, e.g. `sunset_before.jpg` and
//! `sunset_after.jpg` (`-before`/`-after` works too). The navigator keeps a
//! title-sorted list of complete pairs and wraps around at both ends.

use crate::error::{PairError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Raster formats the viewer can decode.
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Which half of a pair a file represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Before,
    After,
}

/// A discovered (not yet decoded) before/after pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPair {
    pub title: Option<String>,
    pub before: PathBuf,
    pub after: PathBuf,
}

impl ComparisonPair {
    /// Builds a pair from two explicit files, deriving the title from the
    /// shared stem base when the files follow the naming convention.
    #[must_use]
    pub fn from_files(before: PathBuf, after: PathBuf) -> Self {
        let title = match (split_stem(&before), split_stem(&after)) {
            (Some((b, Role::Before)), Some((a, Role::After))) if b == a => Some(b),
            _ => None,
        };
        Self {
            title,
            before,
            after,
        }
    }
}

/// Checks whether the file extension is a decodable raster format.
#[must_use]
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Splits a file stem into its base title and pair role.
///
/// Returns `None` when the stem carries no `before`/`after` marker.
fn split_stem(path: &Path) -> Option<(String, Role)> {
    let stem = path.file_stem()?.to_str()?;
    for (marker, role) in [
        ("_before", Role::Before),
        ("-before", Role::Before),
        ("_after", Role::After),
        ("-after", Role::After),
    ] {
        if let Some(base) = stem.strip_suffix(marker) {
            if !base.is_empty() {
                return Some((base.to_string(), role));
            }
        }
    }
    None
}

/// Derives the full pair from one of its halves.
///
/// Looks for the counterpart next to the given file, trying every supported
/// extension.
pub fn pair_for_file(path: &Path) -> Result<ComparisonPair> {
    let (base, role) = split_stem(path)
        .ok_or_else(|| PairError::NotAPairFile(path.display().to_string()))?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let counterpart_markers: &[&str] = match role {
        Role::Before => &["_after", "-after"],
        Role::After => &["_before", "-before"],
    };

    for marker in counterpart_markers {
        for ext in SUPPORTED_EXTENSIONS {
            let candidate = dir.join(format!("{base}{marker}.{ext}"));
            if candidate.is_file() {
                return Ok(match role {
                    Role::Before => ComparisonPair {
                        title: Some(base),
                        before: path.to_path_buf(),
                        after: candidate,
                    },
                    Role::After => ComparisonPair {
                        title: Some(base),
                        before: candidate,
                        after: path.to_path_buf(),
                    },
                });
            }
        }
    }

    Err(match role {
        Role::Before => PairError::MissingAfter(base).into(),
        Role::After => PairError::MissingBefore(base).into(),
    })
}

/// Manages navigation through the before/after pairs of a directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairNavigator {
    pairs: Vec<ComparisonPair>,
    current: usize,
}

impl PairNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator holding a single explicit pair.
    #[must_use]
    pub fn with_pair(pair: ComparisonPair) -> Self {
        Self {
            pairs: vec![pair],
            current: 0,
        }
    }

    /// Scans a directory for complete pairs, sorted by title.
    ///
    /// Unmatched `*_before` / `*_after` files are skipped; an empty result is
    /// an error so the caller can surface it.
    pub fn scan_directory(&mut self, dir: &Path) -> Result<()> {
        let entries = fs::read_dir(dir)
            .map_err(|_| PairError::UnreadableDirectory(dir.display().to_string()))?;

        // BTreeMap keeps titles sorted; first file wins when a base exists
        // with several extensions.
        let mut halves: BTreeMap<String, (Option<PathBuf>, Option<PathBuf>)> = BTreeMap::new();
        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_supported(p))
            .collect();
        paths.sort();

        for path in paths {
            if let Some((base, role)) = split_stem(&path) {
                let slot = halves.entry(base).or_default();
                match role {
                    Role::Before => slot.0.get_or_insert(path),
                    Role::After => slot.1.get_or_insert(path),
                };
            }
        }

        let pairs: Vec<ComparisonPair> = halves
            .into_iter()
            .filter_map(|(title, (before, after))| {
                Some(ComparisonPair {
                    title: Some(title),
                    before: before?,
                    after: after?,
                })
            })
            .collect();

        if pairs.is_empty() {
            return Err(PairError::NoPairsFound.into());
        }

        self.pairs = pairs;
        self.current = 0;
        Ok(())
    }

    /// Returns the currently selected pair, if any.
    #[must_use]
    pub fn current(&self) -> Option<&ComparisonPair> {
        self.pairs.get(self.current)
    }

    /// Advances to the next pair, wrapping around at the end.
    pub fn navigate_next(&mut self) -> Option<&ComparisonPair> {
        if self.pairs.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.pairs.len();
        self.current()
    }

    /// Moves to the previous pair, wrapping around at the start.
    pub fn navigate_previous(&mut self) -> Option<&ComparisonPair> {
        if self.pairs.is_empty() {
            return None;
        }
        self.current = self
            .current
            .checked_sub(1)
            .unwrap_or(self.pairs.len() - 1);
        self.current()
    }

    /// Number of discovered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// One-based position of the current pair, for the toolbar counter.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.current + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, PairError};
    use std::fs::File;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).expect("failed to create file");
        path
    }

    #[test]
    fn supported_extension_check_is_case_insensitive() {
        assert!(is_supported(Path::new("a_before.JPG")));
        assert!(is_supported(Path::new("a_after.png")));
        assert!(!is_supported(Path::new("a_before.txt")));
        assert!(!is_supported(Path::new("no-extension")));
    }

    #[test]
    fn split_stem_recognizes_both_separators() {
        assert_eq!(
            split_stem(Path::new("sunset_before.jpg")),
            Some(("sunset".to_string(), Role::Before))
        );
        assert_eq!(
            split_stem(Path::new("sunset-after.png")),
            Some(("sunset".to_string(), Role::After))
        );
        assert_eq!(split_stem(Path::new("sunset.png")), None);
        // A bare marker has no title to pair on.
        assert_eq!(split_stem(Path::new("_before.png")), None);
    }

    #[test]
    fn scan_finds_sorted_pairs_and_skips_singles() {
        let dir = tempdir().expect("temp dir");
        touch(dir.path(), "zebra_before.png");
        touch(dir.path(), "zebra_after.png");
        touch(dir.path(), "alpine_before.jpg");
        touch(dir.path(), "alpine_after.jpg");
        touch(dir.path(), "lonely_before.png");
        touch(dir.path(), "unrelated.png");

        let mut navigator = PairNavigator::new();
        navigator.scan_directory(dir.path()).expect("scan");

        assert_eq!(navigator.len(), 2);
        assert_eq!(
            navigator.current().and_then(|p| p.title.as_deref()),
            Some("alpine")
        );
    }

    #[test]
    fn scan_of_empty_directory_reports_no_pairs() {
        let dir = tempdir().expect("temp dir");
        touch(dir.path(), "unrelated.png");

        let mut navigator = PairNavigator::new();
        let result = navigator.scan_directory(dir.path());
        assert!(matches!(
            result,
            Err(Error::Pair(PairError::NoPairsFound))
        ));
    }

    #[test]
    fn scan_of_missing_directory_reports_unreadable() {
        let mut navigator = PairNavigator::new();
        let result = navigator.scan_directory(Path::new("/definitely/not/here"));
        assert!(matches!(
            result,
            Err(Error::Pair(PairError::UnreadableDirectory(_)))
        ));
    }

    #[test]
    fn navigation_wraps_in_both_directions() {
        let dir = tempdir().expect("temp dir");
        touch(dir.path(), "a_before.png");
        touch(dir.path(), "a_after.png");
        touch(dir.path(), "b_before.png");
        touch(dir.path(), "b_after.png");

        let mut navigator = PairNavigator::new();
        navigator.scan_directory(dir.path()).expect("scan");

        assert_eq!(navigator.position(), Some(1));
        navigator.navigate_next();
        assert_eq!(navigator.position(), Some(2));
        navigator.navigate_next();
        assert_eq!(navigator.position(), Some(1)); // wrapped
        navigator.navigate_previous();
        assert_eq!(navigator.position(), Some(2)); // wrapped back
    }

    #[test]
    fn pair_for_file_finds_the_counterpart() {
        let dir = tempdir().expect("temp dir");
        let before = touch(dir.path(), "ridge_before.png");
        let after = touch(dir.path(), "ridge_after.jpg");

        let pair = pair_for_file(&before).expect("pair");
        assert_eq!(pair.title.as_deref(), Some("ridge"));
        assert_eq!(pair.after, after);

        let pair = pair_for_file(&after).expect("pair");
        assert_eq!(pair.before, before);
    }

    #[test]
    fn pair_for_file_reports_the_missing_half() {
        let dir = tempdir().expect("temp dir");
        let before = touch(dir.path(), "ridge_before.png");

        let result = pair_for_file(&before);
        assert!(matches!(
            result,
            Err(Error::Pair(PairError::MissingAfter(title))) if title == "ridge"
        ));
    }

    #[test]
    fn from_files_derives_title_only_when_stems_match() {
        let pair = ComparisonPair::from_files(
            PathBuf::from("shot_before.png"),
            PathBuf::from("shot_after.png"),
        );
        assert_eq!(pair.title.as_deref(), Some("shot"));

        let pair = ComparisonPair::from_files(
            PathBuf::from("raw.png"),
            PathBuf::from("edited.png"),
        );
        assert_eq!(pair.title, None);
    }
}
