//! Project root discovery

use std::path::{Path, PathBuf};

/// Pick the ESP-IDF project root.
///
/// An explicit directory wins. Otherwise the nearest ancestor of `start`
/// holding `CMakeLists.txt` plus at least one of `markers` (the build
/// directory, the merge config file) is used, and `start` itself when none
/// qualifies. `CMakeLists.txt` alone also matches component directories.
pub fn resolve_project_root(explicit: Option<&Path>, start: &Path, markers: &[&Path]) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    start
        .ancestors()
        .find(|candidate| {
            candidate.join("CMakeLists.txt").is_file()
                && markers.iter().any(|marker| candidate.join(marker).exists())
        })
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn markers() -> [&'static Path; 2] {
        [Path::new("build"), Path::new("esp-merge.toml")]
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        let root = resolve_project_root(
            Some(Path::new("/somewhere/else")),
            temp.path(),
            &markers(),
        );
        assert_eq!(root, PathBuf::from("/somewhere/else"));
    }

    #[test]
    fn test_walks_up_to_project() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "project(xiaozhi)\n").unwrap();
        fs::create_dir_all(temp.path().join("build")).unwrap();
        let scripts = temp.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();

        let root = resolve_project_root(None, &scripts, &markers());
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_config_file_marks_root_with_custom_build_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "project(xiaozhi)\n").unwrap();
        fs::write(temp.path().join("esp-merge.toml"), "build_dir = \"out\"\n").unwrap();
        fs::create_dir_all(temp.path().join("out")).unwrap();
        let scripts = temp.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();

        let root = resolve_project_root(None, &scripts, &markers());
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_component_cmakelists_is_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("CMakeLists.txt"), "project(xiaozhi)\n").unwrap();
        fs::create_dir_all(temp.path().join("build")).unwrap();
        let component = temp.path().join("components/audio");
        fs::create_dir_all(&component).unwrap();
        fs::write(component.join("CMakeLists.txt"), "idf_component_register()\n").unwrap();

        let root = resolve_project_root(None, &component, &markers());
        assert_eq!(root, temp.path());
    }

    #[test]
    fn test_falls_back_to_start() {
        let temp = TempDir::new().unwrap();
        let root = resolve_project_root(None, temp.path(), &markers());
        assert_eq!(root, temp.path());
    }
}
