//! File set validation
//!
//! Classifies a raw user file selection into the shapefile bundle members
//! {shp, shx, dbf} and reports completeness of the required triple. Pure
//! functions over the input; validation never blocks re-selection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Extensions that make up one shapefile bundle
pub const REQUIRED_EXTENSIONS: [&str; 3] = ["shp", "shx", "dbf"];

/// One user-selected file awaiting upload.
///
/// Ephemeral: created from the raw selection, discarded on successful
/// upload or on re-selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    /// Lowercased extension; empty when the name carries none.
    pub extension: String,
    /// Raw file contents, shipped in the multipart bundle.
    pub contents: Vec<u8>,
}

impl FileDescriptor {
    /// Create a descriptor from a file name and its contents.
    /// The extension is extracted case-insensitively.
    pub fn new(name: impl Into<String>, contents: Vec<u8>) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            size: contents.len() as u64,
            name,
            extension,
            contents,
        }
    }

    /// Read a descriptor from disk (CLI path).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let contents = fs::read(path)?;
        Ok(Self::new(name, contents))
    }
}

fn extension_of(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Ordered sequence of descriptors restricted to the bundle extensions.
///
/// Duplicate extensions are not rejected; wherever a per-extension slot
/// matters downstream, the last file of that extension wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileSet {
    files: Vec<FileDescriptor>,
}

impl FileSet {
    /// Classify a raw selection: keep bundle-extension files in input
    /// order, silently exclude everything else.
    pub fn classify<I>(input: I) -> Self
    where
        I: IntoIterator<Item = FileDescriptor>,
    {
        let files = input
            .into_iter()
            .filter(|f| REQUIRED_EXTENSIONS.contains(&f.extension.as_str()))
            .collect();
        Self { files }
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// The subset of {.shp, .shx, .dbf} not present, for user feedback.
    pub fn missing_extensions(&self) -> Vec<String> {
        REQUIRED_EXTENSIONS
            .iter()
            .filter(|ext| !self.files.iter().any(|f| f.extension == **ext))
            .map(|ext| format!(".{ext}"))
            .collect()
    }

    /// Upload-ready iff every bundle extension is present.
    pub fn is_complete(&self) -> bool {
        self.missing_extensions().is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn descriptor(name: &str) -> FileDescriptor {
        FileDescriptor::new(name, vec![0u8; 4])
    }

    #[test_case("roads.shp", "shp"; "plain lowercase")]
    #[test_case("ROADS.SHP", "shp"; "uppercase folded")]
    #[test_case("archive.tar.dbf", "dbf"; "last dot wins")]
    #[test_case("noextension", ""; "no extension")]
    #[test_case(".hidden", ""; "leading dot only")]
    fn test_extension_extraction(name: &str, expected: &str) {
        assert_eq!(descriptor(name).extension, expected);
    }

    #[test]
    fn test_classify_filters_and_preserves_order() {
        let set = FileSet::classify(vec![
            descriptor("a.shp"),
            descriptor("readme.txt"),
            descriptor("a.dbf"),
            descriptor("preview.png"),
            descriptor("a.shx"),
        ]);

        let names: Vec<&str> = set.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.shp", "a.dbf", "a.shx"]);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let set = FileSet::classify(vec![descriptor("A.SHP"), descriptor("B.Dbf")]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_missing_extensions_is_exact_complement() {
        let set = FileSet::classify(vec![descriptor("a.shp")]);
        assert_eq!(set.missing_extensions(), vec![".shx", ".dbf"]);
        assert!(!set.is_complete());

        let full = FileSet::classify(vec![
            descriptor("a.shp"),
            descriptor("a.shx"),
            descriptor("a.dbf"),
        ]);
        assert!(full.missing_extensions().is_empty());
        assert!(full.is_complete());
    }

    #[test]
    fn test_duplicate_extensions_are_kept() {
        // Exclusivity is not enforced; downstream last-one-wins applies.
        let set = FileSet::classify(vec![
            descriptor("a.shp"),
            descriptor("b.shp"),
            descriptor("a.shx"),
            descriptor("a.dbf"),
        ]);
        assert_eq!(set.len(), 4);
        assert!(set.is_complete());
    }

    #[test]
    fn test_empty_selection_is_missing_everything() {
        let set = FileSet::classify(Vec::new());
        assert!(set.is_empty());
        assert_eq!(set.missing_extensions(), vec![".shp", ".shx", ".dbf"]);
    }
}
