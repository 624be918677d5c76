//! Listing the images to lay out

use std::fs;
use std::io;
use std::path::Path;

/// File extensions accepted as images (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Order in which listed images are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Whatever order the filesystem enumerates entries in. Not stable across
    /// platforms.
    Directory,
    /// Sorted by filename, ignoring case
    CaseInsensitive,
}

/// State of the image directory before listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Existing,
    Created,
}

/// Make sure the image directory exists, creating it if missing
pub fn prepare_image_dir(dir: &Path) -> io::Result<DirStatus> {
    if dir.is_dir() {
        return Ok(DirStatus::Existing);
    }
    fs::create_dir_all(dir)?;
    log::info!("Created image directory {}", dir.display());
    Ok(DirStatus::Created)
}

/// Whether a filename carries one of the supported image extensions
pub fn is_supported_image(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported)),
        None => false,
    }
}

/// Sort filenames case-insensitively. Names equal ignoring case keep their
/// relative order.
pub fn sort_names(names: &mut [String]) {
    names.sort_by_key(|name| name.to_lowercase());
}

/// List supported image filenames in `dir`
pub fn list_images(dir: &Path, ordering: Ordering) -> io::Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(String::from) else {
            log::debug!("Skipping non UTF-8 filename {:?}", entry.file_name());
            continue;
        };

        if is_supported_image(&name) {
            names.push(name);
        }
    }

    if ordering == Ordering::CaseInsensitive {
        sort_names(&mut names);
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_extension_filter() {
        assert!(is_supported_image("a.png"));
        assert!(is_supported_image("C.JPG"));
        assert!(is_supported_image(".hidden.jpeg"));
        assert!(is_supported_image("photo.JpEg"));
        assert!(!is_supported_image("b.txt"));
        assert!(!is_supported_image("png"));
        assert!(!is_supported_image("archive.png.zip"));
    }

    #[test]
    fn test_list_filters_mixed_directory() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.txt", "C.JPG", ".hidden.jpeg"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let listed: HashSet<String> = list_images(dir.path(), Ordering::Directory)
            .unwrap()
            .into_iter()
            .collect();
        let expected: HashSet<String> = ["a.png", "C.JPG", ".hidden.jpeg"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_sorted_listing() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["B.png", "a.png", "C.png"] {
            touch(dir.path(), name);
        }
        let listed = list_images(dir.path(), Ordering::CaseInsensitive).unwrap();
        assert_eq!(listed, vec!["a.png", "B.png", "C.png"]);
    }

    #[test]
    fn test_sort_names() {
        let mut names = vec!["B.png".to_string(), "a.png".to_string(), "C.png".to_string()];
        sort_names(&mut names);
        assert_eq!(names, vec!["a.png", "B.png", "C.png"]);
    }

    #[test]
    fn test_prepare_creates_missing_dir() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("images");
        assert_eq!(prepare_image_dir(&dir).unwrap(), DirStatus::Created);
        assert!(dir.is_dir());
        assert_eq!(prepare_image_dir(&dir).unwrap(), DirStatus::Existing);
    }
}
