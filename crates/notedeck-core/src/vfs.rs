use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for the file system reads index loading needs.
pub trait FileSystem: Send + Sync {
    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// List all files with the given extension under the root directory.
    /// This is a recursive search; results are ordered by path.
    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf>;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, root: &Path, extension: &str) -> Vec<PathBuf> {
        WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
            .collect()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_files_filters_extension_recursively() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("frontend");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("b.md"), "# B").unwrap();
        fs::write(temp_dir.path().join("a.md"), "# A").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "skip").unwrap();

        let files = PhysicalFileSystem.list_files(temp_dir.path(), "md");
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "md"));
    }
}
