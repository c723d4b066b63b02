use crate::error::Error;
use crate::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Subdirectories that must exist directly under the project root
pub const REQUIRED_DIRS: [&str; 4] = ["Build", "Assets", "ProjectSettings", "Packages"];

/// Human-readable form of the readme naming contract, shown in error messages
pub const README_PATTERN_HELP: &str = "<LASTNAME>_<FIRST_INITIAL>_m<INT>_readme.txt";

static README_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+_[a-z]_m\d+_readme\.txt$").expect("valid pattern"));

/// Validate the project structure and locate the milestone readme.
///
/// Two checks run in order, and the first failure aborts: every required
/// directory must exist directly under the root, and exactly one correctly
/// named readme file must sit at the top level. When more than one file
/// matches the naming contract, the lexicographically first name wins so the
/// choice does not depend on directory-iteration order.
///
/// Returns the located readme path so the caller never has to look it up a
/// second time.
pub fn validate_project(project_root: &Path) -> Result<PathBuf> {
    let missing: Vec<String> = REQUIRED_DIRS
        .iter()
        .filter(|dir| !project_root.join(dir).is_dir())
        .map(|dir| dir.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(Error::MissingDirectories(missing));
    }

    find_readme(project_root)?.ok_or(Error::ReadmeNotFound)
}

/// Find the milestone readme directly under `directory` (non-recursive).
fn find_readme(directory: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let name = entry.file_name();
        if entry.file_type()?.is_file()
            && name.to_str().is_some_and(|n| README_RE.is_match(n))
        {
            candidates.push(name);
        }
    }

    candidates.sort();
    Ok(candidates.first().map(|name| directory.join(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn project_with_dirs(dirs: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for dir in dirs {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        temp
    }

    #[test]
    fn reports_every_missing_directory() {
        let temp = project_with_dirs(&["Build", "ProjectSettings"]);

        let err = validate_project(temp.path()).unwrap_err();
        match err {
            Error::MissingDirectories(missing) => {
                assert_eq!(missing, vec!["Assets".to_string(), "Packages".to_string()]);
            }
            other => panic!("expected MissingDirectories, got {other}"),
        }
    }

    #[test]
    fn missing_readme_names_the_expected_pattern() {
        let temp = project_with_dirs(&REQUIRED_DIRS);

        let err = validate_project(temp.path()).unwrap_err();
        assert!(matches!(err, Error::ReadmeNotFound));
        assert!(err.to_string().contains(README_PATTERN_HELP));
    }

    #[test]
    fn misnamed_readme_is_rejected() {
        let temp = project_with_dirs(&REQUIRED_DIRS);
        File::create(temp.path().join("readme.txt")).unwrap();
        File::create(temp.path().join("Smith_JJ_m2_readme.txt")).unwrap();
        File::create(temp.path().join("Smith_J_2_readme.txt")).unwrap();

        assert!(matches!(
            validate_project(temp.path()),
            Err(Error::ReadmeNotFound)
        ));
    }

    #[test]
    fn locates_a_valid_readme() {
        let temp = project_with_dirs(&REQUIRED_DIRS);
        File::create(temp.path().join("Smith_J_m2_readme.txt")).unwrap();

        let readme = validate_project(temp.path()).unwrap();
        assert_eq!(readme, temp.path().join("Smith_J_m2_readme.txt"));
    }

    #[test]
    fn readme_match_is_case_insensitive() {
        let temp = project_with_dirs(&REQUIRED_DIRS);
        File::create(temp.path().join("Smith_J_M2_README.TXT")).unwrap();

        assert!(validate_project(temp.path()).is_ok());
    }

    #[test]
    fn first_sorted_readme_wins_when_several_match() {
        let temp = project_with_dirs(&REQUIRED_DIRS);
        File::create(temp.path().join("Zed_Z_m1_readme.txt")).unwrap();
        File::create(temp.path().join("Adams_A_m1_readme.txt")).unwrap();

        let readme = validate_project(temp.path()).unwrap();
        assert_eq!(readme, temp.path().join("Adams_A_m1_readme.txt"));
    }

    #[test]
    fn readme_in_subdirectory_does_not_count() {
        let temp = project_with_dirs(&REQUIRED_DIRS);
        File::create(temp.path().join("Assets").join("Smith_J_m2_readme.txt")).unwrap();

        assert!(matches!(
            validate_project(temp.path()),
            Err(Error::ReadmeNotFound)
        ));
    }
}
